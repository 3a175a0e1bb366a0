use crate::{
    cli::{LinkArgs, LinkArgsInner},
    constants::{LOCAL_COLUMN, VIEW_COLUMN, VIEW_COLUMN_INDEX},
    core::{candidates::VariantRecord, links::PlotLinker},
    io::{report_reader::ReportReader, report_writer::ReportWriter},
    utils::util::{format_count, Result},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub n_variants: usize,
    pub n_linked: usize,
    pub n_plots: usize,
}

pub fn link(args: LinkArgs) -> Result<()> {
    // The header is indexed before the output is opened so a schema error leaves nothing behind
    let mut reader = ReportReader::new(&args.report)?;
    let linker = PlotLinker::new(args.image_root.clone(), args.link_args.embed);
    match linker.image_root() {
        Some(root) => log::info!("Looking for plots under {}", root.display()),
        None => log::info!("Looking for plots under the working directory"),
    }

    let mut writer = ReportWriter::new(args.output.as_deref())?;
    let summary = annotate_report(&mut reader, &linker, &args.link_args, &mut writer)?;
    writer.finish()?;

    log::info!(
        "Linked {} plots for {} of {} variants",
        format_count(summary.n_plots),
        format_count(summary.n_linked),
        format_count(summary.n_variants)
    );
    Ok(())
}

/// Header with the View column inserted second and the Local column appended.
pub fn augment_header(header: &[String]) -> Vec<String> {
    let mut new_header = header.to_vec();
    new_header.insert(VIEW_COLUMN_INDEX.min(new_header.len()), VIEW_COLUMN.to_string());
    new_header.push(LOCAL_COLUMN.to_string());
    new_header
}

/// Streams every row of `reader` to `writer` with plot links added, preserving row order.
pub fn annotate_report(
    reader: &mut ReportReader,
    linker: &PlotLinker,
    args: &LinkArgsInner,
    writer: &mut ReportWriter,
) -> Result<LinkSummary> {
    writer.write_row(&augment_header(reader.header()))?;

    let columns = reader.columns().clone();
    let mut summary = LinkSummary::default();
    for row in reader.by_ref() {
        let mut row = row?;
        let record = columns.record(&row.fields);
        let links = linker.link(record.plot_candidates())?;
        if links.is_empty() {
            report_unlinked(&record, row.line_number, args.warn_missing);
        }

        summary.n_variants += 1;
        summary.n_plots += links.n_found;
        if !links.is_empty() {
            summary.n_linked += 1;
        }

        let n_fields = row.fields.len();
        links.splice_into(&mut row.fields);
        debug_assert_eq!(row.fields.len(), n_fields + 2);
        writer.write_row(&row.fields)?;
    }
    Ok(summary)
}

fn report_unlinked(record: &VariantRecord, line_number: usize, warn_missing: bool) {
    let reason = match record.mate() {
        Some(mate) if !mate.is_well_formed() => {
            format!("ALT {:?} is not breakend notation", record.alt)
        }
        _ => "no rendered plot found".to_string(),
    };
    let message = format!(
        "Line {line_number}: {} {}:{}-{} has no plot ({reason})",
        record.sv_type, record.chrom, record.start, record.end
    );
    if warn_missing {
        log::warn!("{message}");
    } else {
        log::debug!("{message}");
    }
}

#[cfg(test)]
mod tests;
