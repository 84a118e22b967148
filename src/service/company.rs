use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{company::CompanyRepository, user::UserRepository},
    error::AppError,
    model::{
        company::{Company, CompanyType, CreateCompanyParams, ADDRESS_NOT_PROVIDED},
        user::{CreateUserParams, Role},
    },
};

pub struct CompanyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company not found".to_string()))
    }

    /// Resolves the company profile of a company account.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))
    }

    pub async fn get_system_company(&self) -> Result<Company, AppError> {
        CompanyRepository::new(self.db)
            .find_system()
            .await?
            .ok_or_else(|| AppError::NotFound("System company not found".to_string()))
    }

    /// Creates the SYSTEM company hosting member cars unless it already exists.
    ///
    /// Idempotent. The ADMIN account owning the company is looked up by email and created
    /// when missing.
    ///
    /// # Arguments
    /// - `name`: Display name of the system company
    /// - `system_user_email`: Email of the owning ADMIN account
    ///
    /// # Returns
    /// - `Ok(Company)`: The existing or newly created system company
    /// - `Err(AppError::InternalError)`: The account with that email already owns another
    ///   company
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn ensure_system_company(
        &self,
        name: &str,
        system_user_email: &str,
    ) -> Result<Company, AppError> {
        let txn = self.db.begin().await?;
        let companies = CompanyRepository::new(&txn);

        if let Some(existing) = companies.find_system().await? {
            txn.commit().await?;
            return Ok(existing);
        }

        let users = UserRepository::new(&txn);
        let email = system_user_email.trim().to_lowercase();
        let user = match users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                users
                    .create(CreateUserParams {
                        name: name.to_string(),
                        email,
                        role: Role::Admin,
                    })
                    .await?
            }
        };

        if companies.find_by_user_id(user.id).await?.is_some() {
            return Err(AppError::InternalError(format!(
                "System user {} already owns a non-system company",
                user.id
            )));
        }

        let company = companies
            .create(CreateCompanyParams {
                company_name: name.to_string(),
                address: ADDRESS_NOT_PROVIDED.to_string(),
                is_active: true,
                user_id: user.id,
                company_type: CompanyType::System,
            })
            .await?;

        txn.commit().await?;

        tracing::info!("Created system company {} ({})", company.id, company.company_name);

        Ok(company)
    }
}
