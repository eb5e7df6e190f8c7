//! Builds an `AppState` for handler tests: every use case defaults to a
//! "not wired" stub that panics if touched, and a test overrides only the
//! slots its route exercises.

use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::use_cases::{
    change_password::{ChangePasswordError, IChangePasswordUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginSuccess},
    logout_user::{ILogoutUseCase, LogoutError},
    request_password_reset::{IRequestPasswordResetUseCase, RequestPasswordResetError},
    reset_password::{IResetPasswordUseCase, ResetPasswordError},
};
use crate::portfolio::application::use_cases::{
    delete_record::{DeleteRecordError, IDeleteRecordUseCase},
    fetch_records::{FetchRecordsError, IFetchRecordsUseCase},
    fetch_single::{FetchSingleError, IFetchSingleUseCase},
    save_record::{ISaveRecordUseCase, SaveRecordCommand, SaveRecordError},
    save_single::{ISaveSingleUseCase, SaveSingleCommand, SaveSingleError},
};
use crate::portfolio::domain::entities::{ListKind, ListRecord, SingleKind, SingleRecord};
use crate::site::application::use_cases::{
    fetch_home::{HomeView, IFetchHomeUseCase},
    search_certificates::ISearchCertificatesUseCase,
    search_projects::ISearchProjectsUseCase,
};
use crate::AppState;

struct NotWired;

#[async_trait]
impl IFetchRecordsUseCase for NotWired {
    async fn execute(&self, _kind: ListKind) -> Result<Vec<ListRecord>, FetchRecordsError> {
        unimplemented!("fetch_records not wired in this test")
    }
}

#[async_trait]
impl ISaveRecordUseCase for NotWired {
    async fn execute(&self, _command: SaveRecordCommand) -> Result<ListRecord, SaveRecordError> {
        unimplemented!("save_record not wired in this test")
    }
}

#[async_trait]
impl IDeleteRecordUseCase for NotWired {
    async fn execute(
        &self,
        _kind: ListKind,
        _id: String,
        _confirmed: bool,
    ) -> Result<(), DeleteRecordError> {
        unimplemented!("delete_record not wired in this test")
    }
}

#[async_trait]
impl IFetchSingleUseCase for NotWired {
    async fn execute(&self, _kind: SingleKind) -> Result<SingleRecord, FetchSingleError> {
        unimplemented!("fetch_single not wired in this test")
    }
}

#[async_trait]
impl ISaveSingleUseCase for NotWired {
    async fn execute(&self, _command: SaveSingleCommand) -> Result<SingleRecord, SaveSingleError> {
        unimplemented!("save_single not wired in this test")
    }
}

#[async_trait]
impl IFetchHomeUseCase for NotWired {
    async fn execute(&self) -> HomeView {
        unimplemented!("fetch_home not wired in this test")
    }
}

#[async_trait]
impl ISearchProjectsUseCase for NotWired {
    async fn execute(
        &self,
        _query: Option<String>,
    ) -> Vec<crate::portfolio::domain::entities::Project> {
        unimplemented!("search_projects not wired in this test")
    }
}

#[async_trait]
impl ISearchCertificatesUseCase for NotWired {
    async fn execute(
        &self,
        _query: Option<String>,
    ) -> Vec<crate::portfolio::domain::entities::Certificate> {
        unimplemented!("search_certificates not wired in this test")
    }
}

#[async_trait]
impl ILoginUserUseCase for NotWired {
    async fn execute(&self, _email: &str, _password: &str) -> Result<LoginSuccess, LoginError> {
        unimplemented!("login not wired in this test")
    }
}

#[async_trait]
impl ILogoutUseCase for NotWired {
    async fn execute(&self, _token: &str) -> Result<(), LogoutError> {
        unimplemented!("logout not wired in this test")
    }
}

#[async_trait]
impl IChangePasswordUseCase for NotWired {
    async fn execute(
        &self,
        _user_id: Uuid,
        _current: &str,
        _new: &str,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("change_password not wired in this test")
    }
}

#[async_trait]
impl IRequestPasswordResetUseCase for NotWired {
    async fn execute(&self, _email: &str) -> Result<(), RequestPasswordResetError> {
        unimplemented!("request_password_reset not wired in this test")
    }
}

#[async_trait]
impl IResetPasswordUseCase for NotWired {
    async fn execute(&self, _token: &str, _new_password: &str) -> Result<(), ResetPasswordError> {
        unimplemented!("reset_password not wired in this test")
    }
}

#[derive(Default)]
pub struct TestAppStateBuilder {
    fetch_records: Option<Arc<dyn IFetchRecordsUseCase + Send + Sync>>,
    save_record: Option<Arc<dyn ISaveRecordUseCase + Send + Sync>>,
    delete_record: Option<Arc<dyn IDeleteRecordUseCase + Send + Sync>>,
    fetch_single: Option<Arc<dyn IFetchSingleUseCase + Send + Sync>>,
    save_single: Option<Arc<dyn ISaveSingleUseCase + Send + Sync>>,
    fetch_home: Option<Arc<dyn IFetchHomeUseCase + Send + Sync>>,
    search_projects: Option<Arc<dyn ISearchProjectsUseCase + Send + Sync>>,
    search_certificates: Option<Arc<dyn ISearchCertificatesUseCase + Send + Sync>>,
    login: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    logout: Option<Arc<dyn ILogoutUseCase + Send + Sync>>,
    change_password: Option<Arc<dyn IChangePasswordUseCase + Send + Sync>>,
    request_password_reset: Option<Arc<dyn IRequestPasswordResetUseCase + Send + Sync>>,
    reset_password: Option<Arc<dyn IResetPasswordUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_fetch_records(mut self, uc: impl IFetchRecordsUseCase + Send + Sync + 'static) -> Self {
        self.fetch_records = Some(Arc::new(uc));
        self
    }

    pub fn with_save_record(mut self, uc: impl ISaveRecordUseCase + Send + Sync + 'static) -> Self {
        self.save_record = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_record(
        mut self,
        uc: impl IDeleteRecordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_record = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_single(mut self, uc: impl IFetchSingleUseCase + Send + Sync + 'static) -> Self {
        self.fetch_single = Some(Arc::new(uc));
        self
    }

    pub fn with_save_single(mut self, uc: impl ISaveSingleUseCase + Send + Sync + 'static) -> Self {
        self.save_single = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_home(mut self, uc: impl IFetchHomeUseCase + Send + Sync + 'static) -> Self {
        self.fetch_home = Some(Arc::new(uc));
        self
    }

    pub fn with_search_projects(
        mut self,
        uc: impl ISearchProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_search_certificates(
        mut self,
        uc: impl ISearchCertificatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_certificates = Some(Arc::new(uc));
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login = Some(Arc::new(uc));
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout = Some(Arc::new(uc));
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl IChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_password = Some(Arc::new(uc));
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl IRequestPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.request_password_reset = Some(Arc::new(uc));
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl IResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reset_password = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let not_wired = Arc::new(NotWired);

        web::Data::new(AppState {
            fetch_records_use_case: self.fetch_records.unwrap_or_else(|| not_wired.clone()),
            save_record_use_case: self.save_record.unwrap_or_else(|| not_wired.clone()),
            delete_record_use_case: self.delete_record.unwrap_or_else(|| not_wired.clone()),
            fetch_single_use_case: self.fetch_single.unwrap_or_else(|| not_wired.clone()),
            save_single_use_case: self.save_single.unwrap_or_else(|| not_wired.clone()),
            fetch_home_use_case: self.fetch_home.unwrap_or_else(|| not_wired.clone()),
            search_projects_use_case: self.search_projects.unwrap_or_else(|| not_wired.clone()),
            search_certificates_use_case: self
                .search_certificates
                .unwrap_or_else(|| not_wired.clone()),
            login_user_use_case: self.login.unwrap_or_else(|| not_wired.clone()),
            logout_use_case: self.logout.unwrap_or_else(|| not_wired.clone()),
            change_password_use_case: self.change_password.unwrap_or_else(|| not_wired.clone()),
            request_password_reset_use_case: self
                .request_password_reset
                .unwrap_or_else(|| not_wired.clone()),
            reset_password_use_case: self.reset_password.unwrap_or_else(|| not_wired.clone()),
        })
    }
}
