use astro_profile::{
    cli::{
        celebrity::add_celebrity,
        db::{db_generate, db_list, db_migrate, db_revert},
    },
    core::{db::init_pool, utils::parse_date},
    service::zodiac::{sign_from_date, traits_from_sign},
    settings::get_config,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Celebrity catalogue command
    Celebrity(CelebrityArgs),
    /// Print the sun sign and traits of a birth date
    Zodiac {
        #[arg(short, long)]
        birth_date: String,
    },
}

#[derive(Debug, Args)]
struct CelebrityArgs {
    #[command(subcommand)]
    command: CelebrityCommands,
}

#[derive(Debug, Subcommand)]
enum CelebrityCommands {
    /// Add a celebrity to the catalogue
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        birth_date: String,
        #[arg(short, long)]
        profession: Option<String>,
        #[arg(short, long)]
        image: Option<String>,
    },
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                db_generate(migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let config = get_config()?;
                db_list(&config).await?;
            }
            DbCommands::Migrate => {
                println!("run all pending migration");
                let config = get_config()?;
                db_migrate(&config).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let config = get_config()?;
                db_revert(&config).await?;
            }
        },
        Commands::Celebrity(celebrity_args) => match &celebrity_args.command {
            CelebrityCommands::Add {
                name,
                birth_date,
                profession,
                image,
            } => {
                let config = get_config()?;
                let pool = init_pool(&config).await?;
                let celebrity =
                    add_celebrity(&pool, name, birth_date, profession.clone(), image.clone())
                        .await?;
                println!(
                    "added celebrity {} ({}) as {}",
                    celebrity.name, celebrity.id, celebrity.sun_sign
                );
            }
        },
        Commands::Zodiac { birth_date } => {
            let date = parse_date(birth_date)?;
            let sign = sign_from_date(&date);
            println!("{}: {}", sign, traits_from_sign(sign).join(", "));
        }
    }
    Ok(())
}
