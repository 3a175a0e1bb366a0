use super::{breakend::BreakendMate, svtype::SvType};
use crate::constants::{
    CN_PLOT_LABEL, PLOTTING_DIR, PLOT_EXTENSION, SAMPLOT_DIR, SV_PLOT_LABEL,
};
use std::fmt;

/// Output directory of the renderer that produced a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotDir {
    /// Breakpoint plots.
    Samplot,
    /// Copy-number plots.
    Plotting,
}

impl PlotDir {
    pub fn dir_name(&self) -> &'static str {
        match self {
            PlotDir::Samplot => SAMPLOT_DIR,
            PlotDir::Plotting => PLOTTING_DIR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotCandidate {
    pub dir: PlotDir,
    pub file_name: String,
}

impl PlotCandidate {
    pub(crate) fn new(dir: PlotDir, file_name: String) -> Self {
        Self { dir, file_name }
    }

    /// Path relative to the image root, always `/`-separated so it can be used as a link target.
    pub fn relative_path(&self) -> String {
        self.to_string()
    }

    /// Button label: any path mentioning the copy-number directory is a CN plot, even when
    /// the name only appears in the filename.
    pub fn label(&self) -> &'static str {
        if self.relative_path().contains(PLOTTING_DIR) {
            CN_PLOT_LABEL
        } else {
            SV_PLOT_LABEL
        }
    }
}

impl fmt::Display for PlotCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dir.dir_name(), self.file_name)
    }
}

/// The report fields that determine a variant's plot filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRecord<'a> {
    pub sv_type: &'a str,
    pub chrom: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub alt: &'a str,
}

impl<'a> VariantRecord<'a> {
    /// Parsed SV type, `None` for labels outside the known set.
    pub fn svtype(&self) -> Option<SvType> {
        self.sv_type.parse().ok()
    }

    /// Breakend mate for BND records.
    pub fn mate(&self) -> Option<BreakendMate<'a>> {
        match self.svtype() {
            Some(SvType::BND) => Some(BreakendMate::parse(self.alt)),
            _ => None,
        }
    }

    /// Candidate plot paths in the order the report lists them.
    ///
    /// DEL and DUP are drawn by both renderers, BND plots are keyed on the mate
    /// coordinate, and every other type gets a single breakpoint plot. The type label keeps
    /// the casing it has in the report.
    pub fn plot_candidates(&self) -> Vec<PlotCandidate> {
        match self.svtype() {
            Some(SvType::DELETION) | Some(SvType::DUPLICATION) => {
                let file_name = self.span_file_name();
                vec![
                    PlotCandidate::new(PlotDir::Samplot, file_name.clone()),
                    PlotCandidate::new(PlotDir::Plotting, file_name),
                ]
            }
            Some(SvType::BND) => {
                let mate = BreakendMate::parse(self.alt);
                vec![PlotCandidate::new(
                    PlotDir::Samplot,
                    format!(
                        "{}_{}_{}_{}_{}.{PLOT_EXTENSION}",
                        self.sv_type, self.chrom, self.start, mate.contig, mate.pos
                    ),
                )]
            }
            Some(SvType::INSERTION) | Some(SvType::INVERSION) | Some(SvType::CNV) | None => {
                vec![PlotCandidate::new(PlotDir::Samplot, self.span_file_name())]
            }
        }
    }

    fn span_file_name(&self) -> String {
        format!(
            "{}_{}_{}_{}.{PLOT_EXTENSION}",
            self.sv_type, self.chrom, self.start, self.end
        )
    }
}
