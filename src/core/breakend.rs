//! Mate coordinate extraction from breakend ALT notation.
//!
//! A breakend ALT embeds the mate as `contig:pos` between a pair of brackets,
//! for example `A[chrX:22453669[G` or `]chr9:10362]T`. Bracket direction only
//! encodes strand orientation, so both forms yield the same mate.

const BRACKETS: [char; 2] = ['[', ']'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakendMate<'a> {
    pub contig: &'a str,
    pub pos: &'a str,
}

impl<'a> BreakendMate<'a> {
    /// Splits `alt` around `:`. The text before the first `:` is cut after its last bracket to
    /// give the mate contig; the text after the last `:` is cut at its first bracket to give
    /// the mate position.
    ///
    /// Never fails: an ALT that is not breakend notation produces a mate that does not look
    /// like a coordinate, which [`BreakendMate::is_well_formed`] reports.
    pub fn parse(alt: &'a str) -> Self {
        let head = alt.split_once(':').map_or(alt, |(head, _)| head);
        let tail = alt.rsplit_once(':').map_or(alt, |(_, tail)| tail);
        Self {
            contig: after_last_bracket(head),
            pos: before_first_bracket(tail),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.contig.is_empty() && self.pos.parse::<u64>().is_ok_and(|pos| pos > 0)
    }
}

fn after_last_bracket(s: &str) -> &str {
    s.rfind(BRACKETS).map_or(s, |idx| &s[idx + 1..])
}

fn before_first_bracket(s: &str) -> &str {
    s.find(BRACKETS).map_or(s, |idx| &s[..idx])
}
