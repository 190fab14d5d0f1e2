//! Command handlers
//!
//! Application services that orchestrate use cases.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::dto::*;
use crate::domain::aggregates::{Account, Form, Project, User};
use crate::domain::modules::encode::{encode_form_button, encode_form_properties};
use crate::domain::modules::{encode_modules, FormDecoder, ModuleRegistry};
use crate::domain::validation::ValidationErrors;
use crate::domain::value_objects::{Email, EmailError, EntityId};
use crate::ports::inbound::{
    AccountUseCases, FormUseCases, ProjectUseCases, UseCaseError, UserUseCases,
};
use crate::ports::outbound::{
    AccountRepository, EventPublisher, FormRecord, FormRepository, PasswordHasher,
    ProjectRepository, UserRepository,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Form application service
pub struct FormService {
    form_repo: Arc<dyn FormRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    registry: ModuleRegistry,
}

impl FormService {
    pub fn new(
        form_repo: Arc<dyn FormRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self::with_registry(form_repo, event_publisher, ModuleRegistry::standard())
    }

    /// Build a service over a custom registry. Bodies are validated against
    /// exactly the module types this registry carries.
    pub fn with_registry(
        form_repo: Arc<dyn FormRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        registry: ModuleRegistry,
    ) -> Self {
        Self {
            form_repo,
            event_publisher,
            registry,
        }
    }

    fn record_from(form: &Form) -> FormRecord {
        FormRecord {
            id: form.id().to_string(),
            project_id: form.project_id().to_string(),
            name: form.name().to_string(),
            properties: encode_form_properties(form.properties()),
            button: encode_form_button(form.button()),
            modules: encode_modules(form.modules()),
            created_at: form.created_at(),
            updated_at: form.updated_at(),
        }
    }

    /// Rebuild the aggregate from a stored record. A failure here means the
    /// stored JSON no longer matches any registered schema, which is a
    /// persistence fault rather than a client error.
    fn form_from(&self, record: FormRecord) -> Result<Form, UseCaseError> {
        let decoder = FormDecoder::new(&self.registry);

        let properties = decoder
            .decode_properties(&record.properties)
            .map_err(|e| corrupted_form(&record.id, e))?;
        let button = decoder
            .decode_button(&record.button)
            .map_err(|e| corrupted_form(&record.id, e))?;
        let module_values = record
            .modules
            .as_array()
            .ok_or_else(|| corrupted_form(&record.id, "modules is not an array"))?;
        let modules = decoder
            .decode_modules(module_values)
            .map_err(|e| corrupted_form(&record.id, e))?;

        Ok(Form::rehydrate(
            EntityId::from_string(record.id),
            EntityId::from_string(record.project_id),
            record.name,
            properties,
            button,
            modules,
            record.created_at,
            record.updated_at,
        ))
    }
}

fn corrupted_form(id: &str, cause: impl std::fmt::Display) -> UseCaseError {
    UseCaseError::RepositoryError(format!("stored form {} is corrupted: {}", id, cause))
}

#[async_trait]
impl FormUseCases for FormService {
    async fn create_form(&self, body: Value) -> Result<Form, UseCaseError> {
        // Decode and validate the submitted body
        let decoder = FormDecoder::new(&self.registry);
        let mut form = decoder.decode(&body)?;
        form.mark_created();

        // Persist
        self.form_repo.create(&Self::record_from(&form)).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        // Publish events
        let events = form.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(form)
    }

    async fn get_form(&self, id: &EntityId) -> Result<Option<Form>, UseCaseError> {
        let record = self.form_repo.find_by_id(id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        match record {
            Some(record) => Ok(Some(self.form_from(record)?)),
            None => Ok(None),
        }
    }

    async fn update_form(&self, id: &EntityId, body: Value) -> Result<Form, UseCaseError> {
        let existing = self.form_repo.find_by_id(id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound("Form not found".into()))?;

        // The stored form is replaced wholesale with the resubmitted body;
        // only the identity and creation timestamp survive.
        let decoder = FormDecoder::new(&self.registry);
        let mut form = decoder.decode_with_id(id.clone(), &body)?;
        form.inherit_created_at(existing.created_at);
        form.mark_updated();

        self.form_repo.update_by_id(&Self::record_from(&form)).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        let events = form.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(form)
    }
}

/// Project application service
pub struct ProjectService {
    project_repo: Arc<dyn ProjectRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ProjectService {
    pub fn new(
        project_repo: Arc<dyn ProjectRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            project_repo,
            event_publisher,
        }
    }
}

#[async_trait]
impl ProjectUseCases for ProjectService {
    async fn create_project(&self, command: CreateProjectCommand) -> Result<Project, UseCaseError> {
        // Validate
        let mut errors = ValidationErrors::new();
        if command.account_id.is_empty() {
            errors.push("account_id", "is required");
        }
        if command.name.is_empty() {
            errors.push("name", "is required");
        }
        if !errors.is_empty() {
            return Err(UseCaseError::Validation(errors));
        }

        let mut project = Project::create(
            EntityId::from_string(command.account_id),
            command.name,
        );

        // Persist
        self.project_repo.save(&project).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        // Publish events
        let events = project.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(project)
    }

    async fn get_project(&self, id: &EntityId) -> Result<Option<Project>, UseCaseError> {
        self.project_repo.find_by_id(id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))
    }

    async fn update_project(&self, command: UpdateProjectCommand) -> Result<Project, UseCaseError> {
        let mut errors = ValidationErrors::new();
        if command.account_id.as_deref() == Some("") {
            errors.push("account_id", "must not be empty");
        }
        if command.name.as_deref() == Some("") {
            errors.push("name", "must not be empty");
        }
        if !errors.is_empty() {
            return Err(UseCaseError::Validation(errors));
        }

        let id = EntityId::from_string(&command.project_id);
        let mut project = self.project_repo.find_by_id(&id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound("Project not found".into()))?;

        project.update_details(
            command.account_id.map(EntityId::from_string),
            command.name,
        );

        self.project_repo.save(&project).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        let events = project.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(project)
    }
}

/// Account application service
pub struct AccountService {
    account_repo: Arc<dyn AccountRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AccountService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            account_repo,
            event_publisher,
        }
    }
}

#[async_trait]
impl AccountUseCases for AccountService {
    async fn create_account(&self, command: CreateAccountCommand) -> Result<Account, UseCaseError> {
        if command.name.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.push("name", "is required");
            return Err(UseCaseError::Validation(errors));
        }

        let mut account = Account::create(command.name);

        self.account_repo.save(&account).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        let events = account.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(account)
    }

    async fn get_account(&self, id: &EntityId) -> Result<Option<Account>, UseCaseError> {
        self.account_repo.find_by_id(id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))
    }

    async fn update_account(&self, command: UpdateAccountCommand) -> Result<Account, UseCaseError> {
        if command.name.as_deref() == Some("") {
            let mut errors = ValidationErrors::new();
            errors.push("name", "must not be empty");
            return Err(UseCaseError::Validation(errors));
        }

        let id = EntityId::from_string(&command.account_id);
        let mut account = self.account_repo.find_by_id(&id).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound("Account not found".into()))?;

        if let Some(name) = command.name {
            account.rename(name);
        }

        self.account_repo.save(&account).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        let events = account.take_events();
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(account)
    }
}

/// User application service
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    account_repo: Arc<dyn AccountRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            user_repo,
            account_repo,
            password_hasher,
            event_publisher,
        }
    }
}

#[async_trait]
impl UserUseCases for UserService {
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, UseCaseError> {
        // Validate email and password, collecting every problem at once
        let mut errors = ValidationErrors::new();

        let email = match Email::new(&command.email) {
            Ok(email) => Some(email),
            Err(EmailError::Empty) => {
                errors.push("email", "is required");
                None
            }
            Err(EmailError::InvalidFormat) => {
                errors.push("email", "must be a valid email address");
                None
            }
        };

        if command.password.len() < MIN_PASSWORD_LENGTH {
            errors.push("password", "must be at least 8 characters");
        }

        // Duplicate check only applies to a well-formed address
        if let Some(email) = &email {
            let existing = self.user_repo.find_by_email(email).await
                .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;
            if existing.is_some() {
                errors.push("email", "email already exists");
            }
        }

        if !errors.is_empty() {
            return Err(UseCaseError::Validation(errors));
        }
        let Some(email) = email else {
            return Err(UseCaseError::Validation(errors));
        };

        // Each signup provisions a dedicated account named after the address
        let mut account = Account::create(email.as_str());
        let password_hash = self.password_hasher.hash(&command.password);
        let mut user = User::create(account.id().clone(), email, password_hash);

        // Persist
        self.account_repo.save(&account).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;
        self.user_repo.save(&user).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        // Publish events
        let mut events = account.take_events();
        events.extend(user.take_events());
        self.event_publisher.publish(events).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?;

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<User, UseCaseError> {
        let Ok(email) = Email::new(&command.email) else {
            return Err(UseCaseError::Unauthorized);
        };

        let user = self.user_repo.find_by_email(&email).await
            .map_err(|e| UseCaseError::RepositoryError(e.to_string()))?
            .ok_or(UseCaseError::Unauthorized)?;

        if !self.password_hasher.verify(&command.password, user.password_hash()) {
            return Err(UseCaseError::Unauthorized);
        }

        Ok(user)
    }
}
