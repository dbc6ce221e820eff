// Pipeline processing: title cleanup, location resolution and duplicate merging

pub mod cleaner;
pub mod dedupe;
pub mod location;
pub mod status;
pub mod summary;
