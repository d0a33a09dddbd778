use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use drivectl::{AppError, RemoteEntry};

#[derive(Parser)]
#[command(name = "drivectl")]
#[command(version)]
#[command(
    about = "List, locate, and upload files in a Google Drive folder tree",
    long_about = None
)]
struct Cli {
    /// Path to the configuration file (defaults to ./drivectl.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List files visible to the session
    #[clap(visible_alias = "ls")]
    List {
        /// Restrict the listing to the folder with this id
        #[arg(short, long)]
        folder: Option<String>,
    },
    /// List all folders
    Folders,
    /// Check whether a file or folder exists by name
    Exists {
        /// Name to look up
        name: String,
        /// Treat the name as a folder
        #[arg(short, long)]
        dir: bool,
    },
    /// Print the id of a file or folder
    Id {
        /// Name to resolve
        name: String,
        /// Treat the name as a folder
        #[arg(short, long)]
        dir: bool,
    },
    /// Print the size of the first file in the named folder
    Size {
        /// Folder name
        name: String,
    },
    /// Upload a file into a folder, replacing any same-named file
    #[clap(visible_alias = "up")]
    Upload {
        /// Local file to upload
        source: PathBuf,
        /// Destination folder id
        #[arg(short, long)]
        folder: String,
        /// Destination name (defaults to the source file name)
        #[arg(short, long)]
        name: Option<String>,
        /// Recorded in the uploaded file's description
        #[arg(long)]
        uploaded_by: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let controller = drivectl::controller(cli.config.as_deref())?;

    match cli.command {
        Commands::List { folder } => {
            let entries = match folder {
                Some(folder_id) => controller.list_in_folder(&folder_id)?,
                None => controller.list_all()?,
            };
            print_entries(&entries);
        }
        Commands::Folders => {
            print_entries(&controller.list_all_folders()?);
        }
        Commands::Exists { name, dir } => {
            if dir {
                let found = controller.directory_exists(&name)?;
                println!("{}", if found { "yes" } else { "no" });
            } else {
                // A missing file is an error here, not a "no".
                controller.file_exists(&name)?;
                println!("yes");
            }
        }
        Commands::Id { name, dir } => match controller.resolve_id(&name, dir)? {
            Some(id) => println!("{id}"),
            None => println!("(no id)"),
        },
        Commands::Size { name } => {
            println!("{}", controller.file_size(&name)?);
        }
        Commands::Upload { source, folder, name, uploaded_by, yes } => {
            let destination = match name {
                Some(name) => name,
                None => source
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::Configuration(format!(
                            "Invalid source file name: {}",
                            source.display()
                        ))
                    })?,
            };

            if !yes && !confirm_replace(&destination, &folder)? {
                println!("Aborted.");
                return Ok(());
            }

            let content = std::fs::read(&source)?;
            let id = controller.upload(content, &destination, &folder, uploaded_by.as_deref())?;
            println!("✅ Uploaded '{destination}' ({id})");
        }
    }

    Ok(())
}

fn confirm_replace(destination: &str, folder_id: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(format!(
            "Upload '{destination}' to folder {folder_id}? \
             An existing file with this name will be replaced"
        ))
        .default(false)
        .interact()
        .map_err(|e| AppError::Configuration(format!("Confirmation prompt failed: {e}")))
}

fn print_entries(entries: &[RemoteEntry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }
    for entry in entries {
        match entry.size {
            Some(size) => println!("{}  {} ({size} bytes)", entry.id, entry.name),
            None => println!("{}  {}", entry.id, entry.name),
        }
    }
}
