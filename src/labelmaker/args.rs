use clap::Parser;
use std::path::PathBuf;

/// Flag names keep their underscore spelling so existing operator
/// runbooks keep working. Modes are mutually exclusive and evaluated
/// in the order listed here.
#[derive(Parser, Debug)]
#[command(name = "labelmaker")]
#[command(about = "Generate QR label sheets for event inventory items", long_about = None)]
pub struct Cli {
    /// Generate a page with 24 labels for items in --box. Requires --first_item and --box.
    #[arg(long = "24_labels_box")]
    pub labels_24_box: bool,

    /// Generate a page with 24 labels for items that should go to --building. Requires --first_item and --building.
    #[arg(long = "24_labels_building")]
    pub labels_24_building: bool,

    /// Generate a page with 48 labels for items in --box. Requires --first_item and --box.
    #[arg(long = "48_labels_box")]
    pub labels_48_box: bool,

    /// Generate a page with 48 labels for items that should go to --building. Requires --first_item and --building.
    #[arg(long = "48_labels_building")]
    pub labels_48_building: bool,

    /// Generate labels for all catalog rooms, 8 per room, 48 per page. Requires --first_item.
    #[arg(long = "48_labels_room")]
    pub labels_48_room: bool,

    /// Number of the box.
    #[arg(long = "box")]
    pub box_number: Option<u32>,

    /// Building for the item labels.
    #[arg(long)]
    pub building: Option<String>,

    /// Number of the first item on the first label.
    #[arg(long = "first_item", value_parser = clap::value_parser!(u32).range(1..=100_000_000))]
    pub first_item: Option<u32>,

    /// Config file (defaults apply when the file is absent).
    #[arg(long, default_value = "labelmaker.json")]
    pub config: PathBuf,
}
