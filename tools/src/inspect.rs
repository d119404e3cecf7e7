//! File structure summaries for the `inspect` command.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use codec::{Advisory, CodecResult, Color, DecodeOptions, MtiHeader, Position};
use serde::Serialize;

/// Axis-aligned bounds of the decoded positions, in source space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    fn around(point: Position) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    fn include(&mut self, point: Position) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }
}

/// Everything `inspect` reports about one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub header: MtiHeader,
    pub file_bytes: usize,
    pub signature_valid: bool,
    pub version_known: bool,
    pub decoded_instances: usize,
    /// Record count per type value.
    pub type_counts: BTreeMap<u8, usize>,
    /// Smallest and largest sway value.
    pub sway_range: Option<(u8, u8)>,
    pub distinct_colors: usize,
    pub bounds: Option<Bounds>,
    pub advisories: Vec<Advisory>,
}

/// Decodes `bytes` and summarises what was found.
pub fn inspect_bytes(bytes: &[u8], options: &DecodeOptions) -> CodecResult<InspectReport> {
    let decoded = codec::decode(bytes, options)?;

    let mut type_counts = BTreeMap::new();
    let mut sway_range: Option<(u8, u8)> = None;
    let mut colors: HashSet<Color> = HashSet::new();
    let mut bounds: Option<Bounds> = None;

    for record in &decoded.records {
        *type_counts.entry(record.type_id).or_insert(0) += 1;
        sway_range = Some(match sway_range {
            Some((lo, hi)) => (lo.min(record.sway), hi.max(record.sway)),
            None => (record.sway, record.sway),
        });
        colors.insert(record.color);
        let position = record.source_position();
        match bounds.as_mut() {
            Some(bounds) => bounds.include(position),
            None => bounds = Some(Bounds::around(position)),
        }
    }

    Ok(InspectReport {
        header: decoded.header,
        file_bytes: bytes.len(),
        signature_valid: decoded.header.has_valid_signature(),
        version_known: decoded.header.is_known_version(),
        decoded_instances: decoded.records.len(),
        type_counts,
        sway_range,
        distinct_colors: colors.len(),
        bounds,
        advisories: decoded.advisories,
    })
}

/// Renders a report as indented text.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let header = &report.header;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "signature: 0x{:08X} ({}) version: {} ({})",
        header.signature,
        if report.signature_valid { "ok" } else { "mismatch" },
        header.version,
        if report.version_known { "known" } else { "unknown" },
    );
    let _ = writeln!(
        out,
        "instances: {} declared, {} decoded ({} bytes each, offset {})",
        header.instance_count,
        report.decoded_instances,
        header.instance_size,
        header.instance_offset
    );
    let _ = writeln!(out, "file size: {} bytes", report.file_bytes);

    if !report.type_counts.is_empty() {
        let _ = writeln!(out, "types:");
        for (type_id, count) in &report.type_counts {
            let _ = writeln!(out, "  {type_id}: {count}");
        }
    }
    if let Some((lo, hi)) = report.sway_range {
        let _ = writeln!(out, "sway: {lo}..={hi}");
    }
    if report.decoded_instances > 0 {
        let _ = writeln!(out, "distinct colors: {}", report.distinct_colors);
    }
    if let Some(bounds) = report.bounds {
        let _ = writeln!(out, "bounds: {:?} .. {:?}", bounds.min, bounds.max);
    }
    if !report.advisories.is_empty() {
        let _ = writeln!(out, "warnings:");
        for advisory in &report.advisories {
            let _ = writeln!(out, "  {advisory}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{encode, Placement, HEADER_SIZE, INSTANCE_SIZE, VERSION};

    fn sample() -> Vec<Placement> {
        vec![
            Placement::new([1.0, 2.0, 3.0], 0.0, 0.0, 2).with_sway(10),
            Placement::new([-1.0, 5.0, 0.5], 0.5, -0.5, 2).with_sway(200),
            Placement::new([4.0, -2.0, 9.0], 1.0, 1.0, 7)
                .with_color(Color::new(255, 0, 128, 0)),
        ]
    }

    #[test]
    fn inspect_counts_types_and_colors() {
        let bytes = encode(&sample(), VERSION).unwrap();
        let report = inspect_bytes(&bytes, &DecodeOptions::strict()).unwrap();

        assert!(report.signature_valid);
        assert!(report.version_known);
        assert_eq!(report.file_bytes, HEADER_SIZE + 3 * INSTANCE_SIZE);
        assert_eq!(report.decoded_instances, 3);
        assert_eq!(report.type_counts.get(&2), Some(&2));
        assert_eq!(report.type_counts.get(&7), Some(&1));
        assert_eq!(report.sway_range, Some((10, 255)));
        assert_eq!(report.distinct_colors, 2);
        assert!(report.advisories.is_empty());
    }

    #[test]
    fn inspect_bounds_in_source_space() {
        let bytes = encode(&sample(), VERSION).unwrap();
        let report = inspect_bytes(&bytes, &DecodeOptions::default()).unwrap();
        let bounds = report.bounds.unwrap();
        assert_eq!(bounds.min, [-1.0, -2.0, 0.5]);
        assert_eq!(bounds.max, [4.0, 5.0, 9.0]);
    }

    #[test]
    fn inspect_many_distinct_colors() {
        let count = 200_000usize;
        let placements: Vec<_> = (0..count)
            .map(|i| {
                let [_, r, g, b] = (i as u32).to_be_bytes();
                Placement::new([i as f32, 0.0, 0.0], 0.0, 0.0, 0)
                    .with_color(Color::new(255, r, g, b))
            })
            .collect();
        let bytes = encode(&placements, VERSION).unwrap();

        let report = inspect_bytes(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(report.decoded_instances, count);
        assert_eq!(report.distinct_colors, count);
    }

    #[test]
    fn inspect_header_only_file() {
        let bytes = encode(&[], VERSION).unwrap();
        let report = inspect_bytes(&bytes, &DecodeOptions::default()).unwrap();
        assert_eq!(report.decoded_instances, 0);
        assert!(report.type_counts.is_empty());
        assert_eq!(report.sway_range, None);
        assert_eq!(report.bounds, None);
    }

    #[test]
    fn pretty_output_lists_warnings() {
        let bytes = encode(&sample(), VERSION).unwrap();
        let cut = &bytes[..HEADER_SIZE + INSTANCE_SIZE + 3];
        let report = inspect_bytes(cut, &DecodeOptions::default()).unwrap();

        let text = format_inspect_pretty(&report);
        assert!(text.contains("3 declared, 1 decoded"));
        assert!(text.contains("warnings:"));
        assert!(text.contains("truncated"));
    }

    #[test]
    fn pretty_output_flags_bad_signature() {
        let mut bytes = encode(&sample(), VERSION).unwrap();
        bytes[..4].copy_from_slice(&0u32.to_le_bytes());
        let report = inspect_bytes(&bytes, &DecodeOptions::lenient()).unwrap();

        assert!(!report.signature_valid);
        assert!(format_inspect_pretty(&report).contains("mismatch"));
    }
}
