use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use validator::Validate;

use edusphere::cli::create_admin;
use edusphere_config::DatabaseConfig;
use edusphere_db::init_db_pool;
use edusphere_models::{RegisterRequest, RoleProfile};

#[derive(Parser)]
#[command(name = "edusphere-cli")]
#[command(about = "EduSphere CLI - Administrative tools for EduSphere", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new admin account
    CreateAdmin {
        /// Display name
        #[arg(short = 'n', long)]
        name: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Password (at least 8 characters)
        #[arg(short = 'p', long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => {
            let request = RegisterRequest {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                profile: RoleProfile::Admin,
            };
            if let Err(errors) = request.validate() {
                eprintln!("Invalid input: {errors}");
                std::process::exit(1);
            }

            let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;

            match create_admin(&pool, &name, &email, &password).await {
                Ok(user) => {
                    println!("Admin created successfully");
                    println!("   Id: {}", user.id);
                    println!("   Email: {}", user.email);
                    println!("   Name: {}", user.name);
                }
                Err(e) => {
                    eprintln!("Error creating admin: {}", e.error);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
