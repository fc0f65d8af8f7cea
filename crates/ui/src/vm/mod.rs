mod exam_vm;
mod palette_vm;
mod time_fmt;

pub use exam_vm::{ExamIntent, ExamOutcome, ExamVm};
pub use palette_vm::{PaletteEntryVm, PaletteSectionVm, map_palette};
pub use time_fmt::format_hms;
