pub const SV_TYPE_COLUMN: &str = "Chromoseq_SV_Type";
pub const CHROM_COLUMN: &str = "Chrom";
pub const START_COLUMN: &str = "Start";
pub const END_COLUMN: &str = "End";
pub const ALT_COLUMN: &str = "ALT";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    SV_TYPE_COLUMN,
    CHROM_COLUMN,
    START_COLUMN,
    END_COLUMN,
    ALT_COLUMN,
];

pub const VIEW_COLUMN: &str = "View";
pub const LOCAL_COLUMN: &str = "Local";
pub const VIEW_COLUMN_INDEX: usize = 1;

pub const FIELD_DELIMITER: char = '\t';
pub const JOIN_SEPARATOR: &str = " ";

pub const SAMPLOT_DIR: &str = "samplot";
pub const PLOTTING_DIR: &str = "plotting";
pub const PLOT_EXTENSION: &str = "png";

pub const SV_PLOT_LABEL: &str = "SV plot";
pub const CN_PLOT_LABEL: &str = "CN plot";

pub const BUTTON_TEMPLATE: &str =
    r#"<a class="btn btn-primary" href="__uri__" target="_blank" role="button">__type__</a>"#;
pub const BUTTON_URI_PLACEHOLDER: &str = "__uri__";
pub const BUTTON_LABEL_PLACEHOLDER: &str = "__type__";

pub const DEFAULT_EMBED: bool = false;
pub const DEFAULT_WARN_MISSING: bool = false;
