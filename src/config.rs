use clap::Parser;
use std::path::PathBuf;

use crate::types::Modality;

/// Command-line arguments for dividing a dataset and generating file
/// lists from its directory structure.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Dataset root directory
    pub dataset_root: String,

    /// File list separator
    #[arg(long = "separator", default_value = " ")]
    pub separator: String,

    /// The folder names of images and labels
    #[arg(
        long = "folder",
        num_args = 2,
        default_values_t = [String::from("images"), String::from("annotations")]
    )]
    pub folder: Vec<String>,

    /// The second-level folder names of train set, validation set, test set
    #[arg(
        long = "second_folder",
        num_args = 0..,
        default_values_t = [String::from("train"), String::from("val"), String::from("test")]
    )]
    pub second_folder: Vec<String>,

    /// Data format of images and labels
    #[arg(
        long = "format",
        num_args = 2,
        default_values_t = [String::from("npy"), String::from("png")]
    )]
    pub format: Vec<String>,

    /// Label class names
    #[arg(
        long = "label_class",
        num_args = 0..,
        default_values_t = [String::from("__background__"), String::from("__foreground__")]
    )]
    pub label_class: Vec<String>,

    /// Postfix of images or labels
    #[arg(
        long = "postfix",
        num_args = 2,
        default_values_t = [String::new(), String::new()]
    )]
    pub postfix: Vec<String>,
}

impl Args {
    /// `<dataset_root>/<folder>/<split>` for one modality.
    pub fn split_dir(&self, modality: Modality, split: &str) -> PathBuf {
        PathBuf::from(&self.dataset_root)
            .join(&self.folder[modality.index()])
            .join(split)
    }

    /// Glob pattern `*<postfix>.<format>` for one modality.
    pub fn file_pattern(&self, modality: Modality) -> String {
        format!(
            "*{}.{}",
            self.postfix[modality.index()],
            self.format[modality.index()]
        )
    }
}
