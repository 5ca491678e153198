use migration::Migrator;
use std::{env, fs, path::Path};

mod runner;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&url);
        }
        Some("fresh") => {
            remove_db_file(&url);
            create_db_dir(&url);
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(&url);
            runner::run_all_migrations(&url).await;
        }
    }
}

fn sqlite_file_path(url: &str) -> Option<&str> {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .map(|p| p.split('?').next().unwrap_or(p))
        .filter(|p| !p.is_empty() && *p != ":memory:")
}

fn remove_db_file(url: &str) {
    let Some(path) = sqlite_file_path(url) else {
        println!("Not a file-backed database, nothing to remove: {url}");
        return;
    };

    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(url: &str) {
    if let Some(path) = sqlite_file_path(url) {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent).expect("Failed to create DB directory");
        }
    }
}
