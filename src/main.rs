use mnist_idx::{load_images, load_labels, print_image};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print counts and dimensions of a dataset
    Info {
        #[arg(long)]
        images: String,
        #[arg(long)]
        labels: Option<String>,
    },
    /// Render one digit as ASCII art
    Show {
        #[arg(long)]
        images: String,
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long, default_value_t = 128)]
        threshold: u8,
        #[arg(long)]
        labels: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { images, labels } => {
            if let Err(e) = info(&images, labels.as_deref()) {
                eprintln!("Error reading dataset: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Show {
            images,
            index,
            threshold,
            labels,
        } => {
            if let Err(e) = show(&images, index, threshold, labels.as_deref()) {
                eprintln!("Error showing image: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn info(images_path: &str, labels_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let images = load_images(images_path)?;
    println!(
        "{}: {} images of {}x{} pixels",
        images_path,
        images.count(),
        images.rows(),
        images.columns()
    );
    if let Some(path) = labels_path {
        let labels = load_labels(path)?;
        println!("{}: {} labels", path, labels.len());
    }
    Ok(())
}

fn show(
    images_path: &str,
    index: usize,
    threshold: u8,
    labels_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let images = load_images(images_path)?;
    if index >= images.count() {
        return Err(format!(
            "index {} out of range, dataset holds {} images",
            index,
            images.count()
        )
        .into());
    }
    if let Some(path) = labels_path {
        let labels = load_labels(path)?;
        println!("Label: {}", labels.get(index));
    }
    print_image(&images.get(index), threshold);
    Ok(())
}
