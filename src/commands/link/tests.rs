use super::{annotate_report, augment_header, link, LinkSummary};
use crate::cli::{Cli, LinkArgs, LinkArgsInner};
use crate::core::links::{render_button, PlotLinker};
use crate::error::SvlinkError;
use crate::io::{report_reader::ReportReader, report_writer::ReportWriter};
use crate::utils::util::init_logger;
use clap::Parser;
use std::{fs, path::Path};
use tempfile::{tempdir, TempDir};

const HEADER: &str = "Gene\tChromoseq_SV_Type\tChrom\tStart\tEnd\tALT\tFilter";

const ROWS: [&str; 4] = [
    "ABL1\tDEL\tchr9\t68417082\t92137939\t<DEL>\tPASS",
    "ETV6\tBND\tchr11\t49953211\t49953212\tA]chrX:10410866]G\tPASS",
    "MECOM\tINV\tchr6\t24804833\t34375955\t<INV>\tPASS",
    "KMT2A\tDUP\tchr11\t100\t200\t<DUP>\tPASS",
];

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).expect("plot dir should be creatable");
    fs::write(path, b"png").expect("plot should be writable");
}

fn write_report(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("sample.chromoseq.tsv");
    fs::write(&path, contents).expect("test report should be writable");
    path.to_str().unwrap().to_string()
}

fn parse_link_args(args: &[&str]) -> LinkArgs {
    Cli::try_parse_from(args)
        .expect("CLI parse should succeed")
        .args
}

fn full_report() -> String {
    let mut contents = format!("{HEADER}\n");
    for row in ROWS {
        contents.push_str(row);
        contents.push('\n');
    }
    contents
}

fn read_lines(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .expect("output should be readable")
        .lines()
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

#[test]
fn annotates_report_against_image_root() {
    init_logger();
    let dir = tempdir().unwrap();
    let images = dir.path().join("images");
    touch(&images, "samplot/DEL_chr9_68417082_92137939.png");
    touch(&images, "plotting/DEL_chr9_68417082_92137939.png");
    touch(&images, "samplot/BND_chr11_49953211_chrX_10410866.png");
    touch(&images, "plotting/DUP_chr11_100_200.png");

    let report = write_report(&dir, &full_report());
    let output = dir.path().join("out.tsv");
    let args = parse_link_args(&[
        "svlink",
        &report,
        images.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    link(args).expect("link should succeed");

    let lines = read_lines(&output);
    assert_eq!(lines.len(), ROWS.len() + 1);
    assert_eq!(
        lines[0],
        vec![
            "Gene",
            "View",
            "Chromoseq_SV_Type",
            "Chrom",
            "Start",
            "End",
            "ALT",
            "Filter",
            "Local"
        ]
    );
    for line in &lines {
        assert_eq!(line.len(), 9);
    }

    let genes: Vec<&str> = lines[1..].iter().map(|line| line[0].as_str()).collect();
    assert_eq!(genes, vec!["ABL1", "ETV6", "MECOM", "KMT2A"]);

    assert_eq!(
        lines[1][1],
        format!(
            "{} {}",
            render_button("samplot/DEL_chr9_68417082_92137939.png", "SV plot"),
            render_button("plotting/DEL_chr9_68417082_92137939.png", "CN plot")
        )
    );
    assert_eq!(
        lines[1][8],
        "samplot/DEL_chr9_68417082_92137939.png plotting/DEL_chr9_68417082_92137939.png"
    );

    assert_eq!(
        lines[2][1],
        render_button("samplot/BND_chr11_49953211_chrX_10410866.png", "SV plot")
    );
    assert_eq!(lines[2][8], "samplot/BND_chr11_49953211_chrX_10410866.png");

    assert_eq!(lines[3][1], "");
    assert_eq!(lines[3][8], "");
    assert_eq!(lines[3][2], "INV");

    assert_eq!(lines[4][1], render_button("plotting/DUP_chr11_100_200.png", "CN plot"));
    assert_eq!(lines[4][8], "plotting/DUP_chr11_100_200.png");
}

#[test]
fn summary_counts_linked_variants() {
    init_logger();
    let dir = tempdir().unwrap();
    touch(dir.path(), "samplot/INV_chr6_24804833_34375955.png");
    touch(dir.path(), "samplot/DEL_chr9_68417082_92137939.png");
    touch(dir.path(), "plotting/DEL_chr9_68417082_92137939.png");

    let report = write_report(&dir, &full_report());
    let output = dir.path().join("out.tsv");
    let mut reader = ReportReader::new(&report).unwrap();
    let linker = PlotLinker::new(Some(dir.path().to_path_buf()), false);
    let mut writer = ReportWriter::new(output.to_str()).unwrap();
    let args = LinkArgsInner::new().with(|args| args.warn_missing = true);

    let summary = annotate_report(&mut reader, &linker, &args, &mut writer).unwrap();
    assert_eq!(writer.n_rows(), ROWS.len() + 1);
    writer.finish().unwrap();
    assert_eq!(
        summary,
        LinkSummary {
            n_variants: 4,
            n_linked: 2,
            n_plots: 3,
        }
    );
}

#[test]
fn missing_columns_abort_before_any_output() {
    init_logger();
    let dir = tempdir().unwrap();
    let report = write_report(
        &dir,
        "Gene\tChromoseq_SV_Type\tChrom\tStart\nABL1\tDEL\tchr9\t68417082\n",
    );
    let output = dir.path().join("out.tsv");
    let args = parse_link_args(&["svlink", &report, "-o", output.to_str().unwrap()]);

    let err = link(args).unwrap_err();
    match &err {
        SvlinkError::MissingColumns { columns } => {
            assert_eq!(columns, &vec!["End".to_string(), "ALT".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("End, ALT"));
    assert!(!output.exists());
}

#[test]
fn rows_without_plots_still_gain_two_fields() {
    init_logger();
    let dir = tempdir().unwrap();
    let report = write_report(
        &dir,
        "Chromoseq_SV_Type\tChrom\tStart\tEnd\tALT\n\
         BND\tchr1\t10\t10\tnot-a-breakend\n\
         DEL\tchr1\t10\n",
    );
    let output = dir.path().join("out.tsv");
    let args = parse_link_args(&[
        "svlink",
        &report,
        dir.path().to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--warn-missing",
    ]);
    link(args).expect("link should succeed");

    let lines = read_lines(&output);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 7);
    assert_eq!(lines[1], vec!["BND", "", "chr1", "10", "10", "not-a-breakend", ""]);
    // short rows keep their own width plus the two link fields
    assert_eq!(lines[2], vec!["DEL", "", "chr1", "10", ""]);
}

#[test]
fn embedded_report_links_data_urls() {
    init_logger();
    let dir = tempdir().unwrap();
    touch(dir.path(), "samplot/INV_chr6_24804833_34375955.png");
    let report = write_report(
        &dir,
        "Chromoseq_SV_Type\tChrom\tStart\tEnd\tALT\n\
         INV\tchr6\t24804833\t34375955\t<INV>\n",
    );
    let output = dir.path().join("out.tsv");
    let args = parse_link_args(&[
        "svlink",
        &report,
        dir.path().to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--embed",
    ]);
    link(args).expect("link should succeed");

    let lines = read_lines(&output);
    assert_eq!(
        lines[1][1],
        render_button("data:image/png;base64,cG5n", "SV plot")
    );
    assert_eq!(lines[1][6], "samplot/INV_chr6_24804833_34375955.png");
}

#[test]
fn augmented_header_places_view_second_and_local_last() {
    let header: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    assert_eq!(augment_header(&header), vec!["a", "View", "b", "Local"]);
}
