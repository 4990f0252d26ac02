use actix_web::{web, App, HttpServer};
use std::process::ExitCode;
use tprm_common::{config, db::Database};
use tprm_module_auth::service::AuthService;
use tprm_module_document::{
    config::{StorageConfig, StorageStrategy},
    service::{fs::FileSystemBackend, s3::S3Backend, DispatchBackend},
};

pub mod endpoints;
pub mod openapi;

/// Run the API server
#[derive(clap::Args, Debug, Clone)]
pub struct Run {
    /// Address to bind the HTTP server to
    #[arg(long, env = "TPRM_BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "TPRM_BIND_PORT", default_value_t = 8080)]
    pub bind_port: u16,

    #[command(flatten)]
    pub database: config::Database,

    #[command(flatten)]
    pub auth: config::AuthConfig,

    #[command(flatten)]
    pub storage: StorageConfig,
}

impl Run {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let db = Database::new(&self.database).await?;
        db.migrate().await?;

        let backend = match self.storage.storage_strategy {
            StorageStrategy::Fs => {
                let base = self
                    .storage
                    .fs_path
                    .ok_or_else(|| anyhow::anyhow!("the 'fs' storage strategy requires a path"))?;
                DispatchBackend::from(FileSystemBackend::new(base).await?)
            }
            StorageStrategy::S3 => DispatchBackend::from(S3Backend::new(self.storage.s3_config)?),
        };

        let auth = AuthService::new(db.clone(), self.auth);

        log::info!("listening on {}:{}", self.bind_addr, self.bind_port);

        HttpServer::new(move || {
            let (db, auth, backend) = (db.clone(), auth.clone(), backend.clone());
            App::new().configure(move |svc| configure(svc, db, auth, backend))
        })
        .bind((self.bind_addr, self.bind_port))?
        .run()
        .await?;

        Ok(ExitCode::SUCCESS)
    }
}

/// Mount every module plus the health endpoint.
///
/// The modules register their own scopes under `/api/v1`; this is also the
/// composition the actix tests use, so routing in tests matches production.
pub fn configure(
    config: &mut web::ServiceConfig,
    db: Database,
    auth: AuthService,
    backend: DispatchBackend,
) {
    tprm_module_auth::endpoints::configure(config, auth);
    tprm_module_company::endpoints::configure(config, db.clone());
    tprm_module_engagement::endpoints::configure(config, db.clone());
    tprm_module_assessment::endpoints::configure(config, db.clone());
    tprm_module_task::endpoints::configure(config, db.clone());
    tprm_module_due_diligence::endpoints::configure(config, db.clone());
    tprm_module_user::endpoints::configure(config, db.clone());
    tprm_module_scoring::endpoints::configure(config, db.clone());
    tprm_module_document::endpoints::configure(config, db.clone(), backend);
    endpoints::configure(config, db);
}
