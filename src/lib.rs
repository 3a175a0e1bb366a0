pub mod cli;
pub mod commands;
pub mod error;

pub mod core {
    pub mod breakend;
    pub mod candidates;
    pub mod links;
    pub mod svtype;
}

pub mod io {
    pub mod readers;
    pub mod report_reader;
    pub mod report_writer;
}

pub mod utils {
    pub mod util;
}

pub mod constants;

pub use constants::*;
