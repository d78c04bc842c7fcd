use clap::{Parser, Subcommand};
use contacts_core::constants::DEFAULT_PAGE_SIZE;
use contacts_core::{BaseUrl, ContactService, CoreConfig, NewContact};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Contact directory CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts sorted by name
    List {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Contacts per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },
    /// Show one contact
    Show {
        /// Contact id
        id: String,
    },
    /// Create a contact
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        status: String,
    },
    /// Delete a contact and its photo
    Delete {
        /// Contact id
        id: String,
    },
    /// Store an image file as a contact's photo
    AttachPhoto {
        /// Contact id
        id: String,
        /// Image file to upload
        path: PathBuf,
        /// Origin used in the photo URL (defaults to CONTACTS_PUBLIC_URL, then http://localhost)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Copy a stored photo to a local file
    ExportPhoto {
        /// Stored photo filename, e.g. <id>.png
        filename: String,
        /// Destination path
        dest: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let cfg = CoreConfig::from_env()?;
    let service = ContactService::new(&cfg);

    match cli.command {
        Some(Commands::List { page, size }) => match service.list(page, size) {
            Ok(page) if page.content.is_empty() => {
                println!("No contacts found.");
            }
            Ok(page) => {
                for contact in &page.content {
                    println!(
                        "ID: {}, Name: {}, Email: {}, Photo: {}",
                        contact.id,
                        contact.name,
                        contact.email,
                        contact.photo_url.as_deref().unwrap_or("-")
                    );
                }
                println!(
                    "Page {} of {} ({} contacts)",
                    page.number + 1,
                    page.total_pages,
                    page.total_elements
                );
            }
            Err(e) => eprintln!("Error listing contacts: {}", e),
        },
        Some(Commands::Show { id }) => match service.get(&id) {
            Ok(contact) => {
                println!("ID: {}", contact.id);
                println!("Name: {}", contact.name);
                println!("Email: {}", contact.email);
                println!("Title: {}", contact.title);
                println!("Phone: {}", contact.phone);
                println!("Address: {}", contact.address);
                println!("Status: {}", contact.status);
                println!("Photo: {}", contact.photo_url.as_deref().unwrap_or("-"));
            }
            Err(e) => eprintln!("Error showing contact: {}", e),
        },
        Some(Commands::Create {
            name,
            email,
            title,
            phone,
            address,
            status,
        }) => {
            let new = NewContact {
                name,
                email,
                title,
                phone,
                address,
                status,
            };
            match service.create(new) {
                Ok(contact) => println!("Created contact with ID: {}", contact.id),
                Err(e) => eprintln!("Error creating contact: {}", e),
            }
        }
        Some(Commands::Delete { id }) => match service.delete(&id) {
            Ok(()) => println!("Deleted contact: {}", id),
            Err(e) => eprintln!("Error deleting contact: {}", e),
        },
        Some(Commands::AttachPhoto { id, path, base_url }) => {
            let base_url = base_url
                .map(BaseUrl::new)
                .or_else(|| cfg.public_base_url().cloned())
                .unwrap_or_else(|| BaseUrl::new("http://localhost"));
            let content = std::fs::read(&path)?;
            let original = file_name(&path);

            match service
                .photos()
                .attach_photo(&id, &content, original.as_deref(), &base_url)
            {
                Ok(url) => println!("Attached photo: {}", url),
                Err(e) => eprintln!("Error attaching photo: {}", e),
            }
        }
        Some(Commands::ExportPhoto { filename, dest }) => {
            match service.photos().read_photo(&filename) {
                Ok(photo) => {
                    std::fs::write(&dest, &photo.bytes)?;
                    println!(
                        "Exported {} ({}, {} bytes) to {}",
                        photo.filename,
                        photo.content_type(),
                        photo.bytes.len(),
                        dest.display()
                    );
                }
                Err(e) => eprintln!("Error exporting photo: {}", e),
            }
        }
        None => {
            println!("Use 'contacts --help' for commands");
        }
    }

    Ok(())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
