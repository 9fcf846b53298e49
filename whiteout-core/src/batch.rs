//! Sequential directory batch: scan, then clear each file in turn

use std::path::Path;

use crate::remover::{remove_background, Cleared, RemoveError};
use crate::scanner::{scan, ScanError};

/// Per-file tally for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

/// Process every `.png` in `dir`, one file at a time.
///
/// `on_file` is called once per file with that file's result. A failed file
/// is counted and the loop moves on. Only a scan error (missing or unreadable
/// directory) ends the run early, before any file is touched.
pub fn run<F>(dir: impl AsRef<Path>, mut on_file: F) -> Result<BatchSummary, ScanError>
where
    F: FnMut(&Path, &Result<Cleared, RemoveError>),
{
    let paths = scan(dir.as_ref())?;
    let mut summary = BatchSummary::default();

    for path in &paths {
        let result = remove_background(path);
        match &result {
            Ok(_) => summary.processed += 1,
            Err(_) => summary.failed += 1,
        }
        on_file(path, &result);
    }

    log::info!(
        "{}: {} processed, {} failed",
        dir.as_ref().display(),
        summary.processed,
        summary.failed
    );

    Ok(summary)
}

/// The stdout line for one file's result.
pub fn report_line(path: &Path, result: &Result<Cleared, RemoveError>) -> String {
    match result {
        Ok(_) => format!("Processed {}", path.display()),
        Err(e) => format!("Failed to process {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;

    fn write_icon(path: &Path) {
        RgbaImage::from_pixel(3, 3, Rgba([250, 250, 250, 255]))
            .save(path)
            .unwrap();
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_run_missing_directory_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut calls = 0;

        let err = run(tmp.path().join("icons"), |_, _| calls += 1).unwrap_err();
        assert!(matches!(err, ScanError::Missing(_)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_corrupt_file_does_not_stop_batch() {
        init_logger();
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a_broken.png"), b"garbage").unwrap();
        write_icon(&tmp.path().join("b_good.png"));

        let mut seen: Vec<(PathBuf, bool)> = Vec::new();
        let summary = run(tmp.path(), |path, result| {
            seen.push((path.to_path_buf(), result.is_ok()));
        })
        .unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                processed: 1,
                failed: 1,
            }
        );
        assert_eq!(summary.total(), 2);
        assert_eq!(
            seen,
            vec![
                (tmp.path().join("a_broken.png"), false),
                (tmp.path().join("b_good.png"), true),
            ]
        );

        let good = image::open(tmp.path().join("b_good.png")).unwrap().into_rgba8();
        assert!(good.pixels().all(|p| *p == Rgba([255, 255, 255, 0])));
    }

    #[test]
    fn test_non_png_files_left_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let jpg_bytes = b"not even a jpeg".to_vec();
        fs::write(tmp.path().join("photo.jpg"), &jpg_bytes).unwrap();
        write_icon(&tmp.path().join("shout.PNG"));
        let shout_before = fs::read(tmp.path().join("shout.PNG")).unwrap();

        let summary = run(tmp.path(), |_, _| {}).unwrap();

        assert_eq!(summary.total(), 0);
        assert_eq!(fs::read(tmp.path().join("photo.jpg")).unwrap(), jpg_bytes);
        assert_eq!(fs::read(tmp.path().join("shout.PNG")).unwrap(), shout_before);
    }

    #[test]
    fn test_results_carry_cleared_counts() {
        let tmp = tempfile::tempdir().unwrap();
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([242, 243, 244, 200]));
        img.save(tmp.path().join("one.png")).unwrap();

        let mut cleared = Vec::new();
        run(tmp.path(), |_, result| {
            if let Ok(c) = result {
                cleared.push(c.cleared);
            }
        })
        .unwrap();

        assert_eq!(cleared, vec![1]);
    }

    #[test]
    fn test_report_lines_name_each_file() {
        init_logger();
        let tmp = tempfile::tempdir().unwrap();
        let broken = tmp.path().join("a_broken.png");
        let good = tmp.path().join("b_good.png");
        fs::write(&broken, b"garbage").unwrap();
        write_icon(&good);

        let mut lines = Vec::new();
        run(tmp.path(), |path, result| lines.push(report_line(path, result))).unwrap();

        let decode_err = match remove_background(&broken) {
            Err(e) => e.to_string(),
            Ok(_) => panic!("garbage decoded as an image"),
        };
        assert!(decode_err.starts_with("Failed to decode image:"));
        assert_eq!(
            lines,
            vec![
                format!("Failed to process {}: {}", broken.display(), decode_err),
                format!("Processed {}", good.display()),
            ]
        );
    }

    #[test]
    fn test_report_line_for_missing_file() {
        let path = Path::new("icons/gone.png");
        let result = remove_background(path);
        let line = report_line(path, &result);
        assert!(line.starts_with("Failed to process icons/gone.png: Failed to read file:"));
    }

    #[test]
    fn test_run_regular_file_is_scan_error() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("icons.png");
        write_icon(&file);

        let err = run(&file, |_, _| {}).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_processed() {
        use image::ImageFormat;
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(OsStr::from_bytes(b"ic\xffons"));
        fs::create_dir(&dir).unwrap();
        let odd = dir.join(OsStr::from_bytes(b"ic\xffon.png"));
        RgbaImage::from_pixel(1, 1, Rgba([250, 250, 250, 255]))
            .save_with_format(&odd, ImageFormat::Png)
            .unwrap();
        write_icon(&dir.join("a.png"));

        let summary = run(&dir, |_, _| {}).unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                processed: 2,
                failed: 0,
            }
        );

        let out = image::open(&odd).unwrap().into_rgba8();
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    }
}
