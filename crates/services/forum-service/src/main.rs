//! Forum Service - command line entry point for the forum use cases.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use common::{telemetry::init_tracing, AppError};
use domain::{DomainError, Either};
use forum_service_lib::config::ForumServiceConfig;
use forum_service_lib::infra::{Argon2Hasher, InMemoryStudentsRepository, JwtEncrypter};
use forum_service_lib::presenters::StudentResponse;
use forum_service_lib::use_cases::{
    AuthenticateStudentRequest, AuthenticateStudentUseCase, RegisterStudentRequest,
    RegisterStudentUseCase, UseCase,
};

#[derive(Parser)]
#[command(name = "forum-service")]
#[command(about = "Forum student registration and authentication")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a student and print it as JSON
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "FORUM_STUDENT_PASSWORD")]
        password: String,
        /// Authenticate right after registering and print the access token
        #[arg(long)]
        login: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing("info");

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:?}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let config = ForumServiceConfig::from_env()?;

    let students = Arc::new(InMemoryStudentsRepository::new());
    let hasher = Arc::new(Argon2Hasher::new(&config.hashing)?);
    let encrypter = Arc::new(JwtEncrypter::new(config.jwt)?);

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            login,
        } => {
            let register = RegisterStudentUseCase::new(students.clone(), hasher.clone());
            let outcome = register
                .execute(RegisterStudentRequest {
                    name,
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;

            let student = match outcome {
                Either::Right(response) => response.student,
                Either::Left(err) => return Ok(report(&err)),
            };

            let body = serde_json::to_string_pretty(&StudentResponse::from(&student))
                .map_err(|e| AppError::internal(e.to_string()))?;
            println!("{}", body);

            if login {
                let authenticate = AuthenticateStudentUseCase::new(students, hasher, encrypter);
                match authenticate
                    .execute(AuthenticateStudentRequest { email, password })
                    .await?
                {
                    Either::Right(response) => println!("{}", response.access_token),
                    Either::Left(err) => return Ok(report(&err)),
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print a domain failure and pick the exit code.
fn report(err: &dyn DomainError) -> ExitCode {
    let err = AppError::domain(err);
    eprintln!("{} ({})", err.user_message(), err.code());
    ExitCode::FAILURE
}
