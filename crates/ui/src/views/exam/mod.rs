mod exam;

pub use exam::ExamView;
