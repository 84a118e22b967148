use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{company::CompanyRepository, user::UserRepository},
    error::AppError,
    model::{
        company::{CompanyType, CreateCompanyParams, ADDRESS_NOT_PROVIDED},
        user::{CreateUserParams, Role, User},
    },
};

pub const DUPLICATE_EMAIL: &str = "Email already registered";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Emails are compared trimmed and lowercased. COMPANY accounts get an inactive NORMAL
    /// company profile named after the user, created in the same transaction.
    ///
    /// # Arguments
    /// - `params`: Name, email and role of the account
    ///
    /// # Returns
    /// - `Ok(User)`: The registered user
    /// - `Err(AppError::BadRequest)`: Blank name or email, or the email is taken
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let name = params.name.trim().to_string();
        let email = params.email.trim().to_lowercase();

        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        let txn = self.db.begin().await?;
        let users = UserRepository::new(&txn);

        if users.email_exists(&email).await? {
            return Err(AppError::BadRequest(DUPLICATE_EMAIL.to_string()));
        }

        let user = users
            .create(CreateUserParams {
                name,
                email,
                role: params.role,
            })
            .await
            .map_err(|err| AppError::on_unique_violation(err, DUPLICATE_EMAIL))?;

        if user.role == Role::Company {
            CompanyRepository::new(&txn)
                .create(CreateCompanyParams {
                    company_name: user.name.clone(),
                    address: ADDRESS_NOT_PROVIDED.to_string(),
                    is_active: false,
                    user_id: user.id,
                    company_type: CompanyType::Normal,
                })
                .await?;
        }

        txn.commit().await?;

        tracing::info!("Registered user {} with role {}", user.id, user.role);

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
