use viewdock::PartitionMode;
use viewdock::io::Format;

use crate::cli::{InputFormat, Mode};

impl From<Mode> for PartitionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::AllOne => PartitionMode::AllOne,
            Mode::FirstOfCluster => PartitionMode::FirstOfCluster,
            Mode::AllByCluster => PartitionMode::AllByCluster,
        }
    }
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Dock4 => Format::Dock4,
            InputFormat::Chimerax => Format::Chimerax,
        }
    }
}

pub fn mode_description(mode: PartitionMode) -> &'static str {
    match mode {
        PartitionMode::AllOne => "all entries in one collection",
        PartitionMode::FirstOfCluster => "first entry of each cluster",
        PartitionMode::AllByCluster => "one collection per cluster",
    }
}
