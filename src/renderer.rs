use crate::types::{DirectoryEntry, Options};
use chrono::{DateTime, Datelike, Local, Timelike};
use std::io::{self, Write};
use std::path::Path;

/// Wraps names that contain a space.
pub const QUOTE: char = '\'';
/// Appended to every directory name.
pub const DIRECTORY_MARKER: char = '\\';
pub const NAMES_PER_LINE: usize = 4;
const NAME_WIDTH: usize = 40;
const SIZE_WIDTH: usize = 13;

/// Write the listing in the mode `options` selects, followed by two blank lines.
pub fn render<W: Write>(
    out: &mut W,
    entries: &[DirectoryEntry],
    dir: &Path,
    options: &Options,
) -> io::Result<()> {
    if options.long_format {
        render_long(out, entries, dir)?;
    } else {
        render_grid(out, entries)?;
    }

    writeln!(out)?;
    writeln!(out)?;
    out.flush()
}

pub fn render_grid<W: Write>(out: &mut W, entries: &[DirectoryEntry]) -> io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        if i % NAMES_PER_LINE == 0 {
            writeln!(out)?;
        }
        write!(out, "{:>NAME_WIDTH$}", format_name(entry))?;
    }
    Ok(())
}

pub fn render_long<W: Write>(out: &mut W, entries: &[DirectoryEntry], dir: &Path) -> io::Result<()> {
    write!(out, "\n\tDirectory: {}\n\n\n", dir.display())?;
    writeln!(out, "Mode \t\t LastWriteTime \t\t Length Name")?;
    writeln!(out, "---- \t\t ------------- \t\t ------ ----")?;

    for entry in entries {
        write!(out, "{} \t{} ", entry.mode, format_time(&entry.modified))?;
        if entry.is_dir {
            write!(out, "\t\t")?;
        } else {
            write!(out, "{:>SIZE_WIDTH$} ", entry.size)?;
        }
        writeln!(out, "{}", format_name(entry))?;
    }
    Ok(())
}

/// `MM/DD/YYYY  HH:MM`, year unpadded.
#[must_use]
pub fn format_time(t: &DateTime<Local>) -> String {
    format!(
        "{:02}/{:02}/{}  {:02}:{:02}",
        t.month(),
        t.day(),
        t.year(),
        t.hour(),
        t.minute()
    )
}

#[must_use]
pub fn format_name(entry: &DirectoryEntry) -> String {
    let mut name = if entry.name.contains(' ') {
        format!("{QUOTE}{}{QUOTE}", entry.name)
    } else {
        entry.name.clone()
    };
    if entry.is_dir {
        name.push(DIRECTORY_MARKER);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_entry(name: &str, is_dir: bool, size: u64) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            is_dir,
            size,
            modified: Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap(),
            mode: if is_dir { "drwxr-xr-x" } else { "-rw-r--r--" }.to_string(),
        }
    }

    fn render_to_string(entries: &[DirectoryEntry], options: &Options) -> String {
        let mut buf = Vec::new();
        render(&mut buf, entries, Path::new("/home/user/work"), options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name(&make_entry("plain.txt", false, 1)), "plain.txt");
        assert_eq!(format_name(&make_entry("my file.txt", false, 1)), "'my file.txt'");
        assert_eq!(format_name(&make_entry("src", true, 0)), "src\\");
        assert_eq!(format_name(&make_entry("My Docs", true, 0)), "'My Docs'\\");
    }

    #[test]
    fn test_format_time_pads_fields() {
        let t = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(format_time(&t), "03/05/2024  09:07");

        let t = Local.with_ymd_and_hms(2023, 12, 25, 23, 59, 0).unwrap();
        assert_eq!(format_time(&t), "12/25/2023  23:59");
    }

    #[test]
    fn test_grid_groups_of_four() {
        let entries: Vec<DirectoryEntry> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|n| make_entry(n, false, 1))
            .collect();
        let output = render_to_string(&entries, &Options::default());

        let field = |n: &str| format!("{n:>40}");
        let expected = format!(
            "\n{}{}{}{}\n{}\n\n",
            field("a"),
            field("b"),
            field("c"),
            field("d"),
            field("e")
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_grid_line_count() {
        let entries: Vec<DirectoryEntry> = (0..9)
            .map(|i| make_entry(&format!("f{i}"), false, 1))
            .collect();
        let output = render_to_string(&entries, &Options::default());

        let lines: Vec<&str> = output.lines().collect();
        // blank, 4 names, 4 names, 1 name, trailing blank
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1].len(), 4 * 40);
        assert_eq!(lines[2].len(), 4 * 40);
        assert_eq!(lines[3].trim(), "f8");
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_grid_empty() {
        assert_eq!(render_to_string(&[], &Options::default()), "\n\n");
    }

    #[test]
    fn test_grid_marks_and_quotes() {
        let entries = vec![make_entry("two words", false, 1), make_entry("dir", true, 0)];
        let output = render_to_string(&entries, &Options::default());

        assert!(output.contains("'two words'"));
        assert!(output.contains("dir\\"));
        assert!(!output.contains("words\\"));
    }

    #[test]
    fn test_long_format() {
        let entries = vec![
            make_entry("src", true, 4096),
            make_entry("notes.txt", false, 1234),
            make_entry("my report.pdf", false, 7),
        ];
        let options = Options {
            long_format: true,
            ..Options::default()
        };
        let output = render_to_string(&entries, &options);

        let expected = concat!(
            "\n\tDirectory: /home/user/work\n\n\n",
            "Mode \t\t LastWriteTime \t\t Length Name\n",
            "---- \t\t ------------- \t\t ------ ----\n",
            "drwxr-xr-x \t03/05/2024  09:07 \t\tsrc\\\n",
            "-rw-r--r-- \t03/05/2024  09:07          1234 notes.txt\n",
            "-rw-r--r-- \t03/05/2024  09:07             7 'my report.pdf'\n",
            "\n\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_long_format_directory_has_no_size() {
        let entries = vec![make_entry("build", true, 4096)];
        let options = Options {
            long_format: true,
            ..Options::default()
        };
        let output = render_to_string(&entries, &options);
        assert!(!output.contains("4096"));
    }
}
