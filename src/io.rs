use glob::glob;
use indicatif::ProgressBar;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Args;
use crate::types::Modality;
use crate::utils::relative_to_root;

/// Collect the files of one modality for one dataset split.
///
/// The pattern `*<postfix>.<format>` is searched directly in the split
/// directory, one subdirectory deep, and two subdirectories deep;
/// deeper nesting is not scanned. The union of the three searches is
/// returned sorted lexicographically by full path.
pub fn find_split_files(
    args: &Args,
    modality: Modality,
    split: &str,
) -> Result<Vec<PathBuf>, glob::PatternError> {
    let split_dir = args.split_dir(modality, split);
    let pattern = args.file_pattern(modality);

    let searches = [
        format!("{}/{}", split_dir.display(), pattern),
        format!("{}/*/{}", split_dir.display(), pattern),
        format!("{}/*/*/{}", split_dir.display(), pattern),
    ];

    let mut files = Vec::new();
    for search in &searches {
        files.extend(glob(search)?.filter_map(|entry| entry.ok()));
    }
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(files)
}

/// Write the label-class file, one class name per line, in input order.
pub fn write_label_classes(path: &Path, classes: &[String]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for class in classes {
        writeln!(file, "{}", class)?;
    }
    file.flush()
}

/// Write one split's file list, pairing images and labels by index.
///
/// `labels` may be empty, in which case each line carries the image
/// path alone. Every line is echoed through the progress bar as it is
/// written.
pub fn write_split_list(
    path: &Path,
    root: &Path,
    images: &[PathBuf],
    labels: &[PathBuf],
    separator: &str,
    pb: &ProgressBar,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for (index, image) in images.iter().enumerate() {
        let left = relative_to_root(image, root);
        let line = match labels.get(index) {
            Some(label) => format!("{}{}{}", left, separator, relative_to_root(label, root)),
            None => left,
        };
        writeln!(file, "{}", line)?;
        pb.println(&line);
        pb.inc(1);
    }
    file.flush()
}
