use log::{info, warn};
use std::error::Error;
use std::path::Path;

use crate::config::Args;
use crate::io::{find_split_files, write_label_classes, write_split_list};
use crate::types::Modality;
use crate::utils::create_progress_bar;

/// Generate `labels.txt` and one `<split>.txt` file list per configured
/// split under the dataset root.
///
/// Images and labels are paired by their position in the sorted file
/// lists, not by filename stem: if the two sides do not sort into
/// corresponding order the pairs will be wrong without any error.
pub fn generate_lists(args: &Args, dataset_root: &Path) -> Result<(), Box<dyn Error>> {
    write_label_classes(&dataset_root.join("labels.txt"), &args.label_class)?;

    for split in &args.second_folder {
        info!("Creating {}.txt...", split);

        let image_files = find_split_files(args, Modality::Image, split)?;
        let label_files = find_split_files(args, Modality::Label, split)?;

        if image_files.is_empty() {
            warn!(
                "No images in {} !!!",
                args.split_dir(Modality::Image, split).display()
            );
        }
        if label_files.is_empty() {
            warn!(
                "No labels in {} !!!",
                args.split_dir(Modality::Label, split).display()
            );
        }

        // A nonzero label count must match the image count exactly; a
        // zero label count produces image-only lines instead.
        if !label_files.is_empty() && image_files.len() != label_files.len() {
            return Err(format!(
                "Number of images = {} and number of labels = {} in {}. \
                 Either the number of images equals the number of labels, \
                 or the number of labels is zero. Please check your dataset!",
                image_files.len(),
                label_files.len(),
                split
            )
            .into());
        }

        let pb = create_progress_bar(image_files.len() as u64, split);
        write_split_list(
            &dataset_root.join(format!("{}.txt", split)),
            dataset_root,
            &image_files,
            &label_files,
            &args.separator,
            &pb,
        )?;
        pb.finish_with_message(format!("{}.txt complete", split));
    }

    Ok(())
}
