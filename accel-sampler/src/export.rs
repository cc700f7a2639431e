//! Text recordings of a sample window.
//!
//! A recording has three lines, the x, y and z channels in that order. Each line holds the
//! channel values separated by commas, oldest first:
//!
//! ```text
//! 0.0012,0.0011,...
//! 0.0003,-0.0001,...
//! -0.9991,-1.0004,...
//! ```

use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use imu_common::{Axis, Sample3D, SampleWindow};

use crate::config::DEFAULT_SAMPLE_PERIOD_MILLIS;
use crate::models::errors::SamplerError;

const N_AXES: usize = 3;

/// Writes the three channels of `window`, one line per axis.
///
/// Values keep a decimal point (`0.0`, `-1.0`) and the last line has no terminator.
pub fn write_axes<W: Write>(window: &SampleWindow, mut writer: W) -> Result<(), SamplerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for channel in window.channels() {
        wtr.write_record(channel.iter().map(|v| format!("{:?}", v)))?;
    }
    let mut bytes = wtr
        .into_inner()
        .map_err(|e| SamplerError::Io(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Reads the three channels of a recording, in axis order.
///
/// Returns Parse error on a value that is not a number and Format error if the recording does
/// not have exactly three lines of equal length.
pub fn read_axes<R: Read>(reader: R) -> Result<[Vec<f64>; N_AXES], SamplerError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::with_capacity(N_AXES);
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                field.trim().parse::<f64>().map_err(|e| {
                    SamplerError::Parse(format!("row {}: '{}': {}", row_idx, field, e))
                })
            })
            .collect::<Result<Vec<f64>, SamplerError>>()?;
        rows.push(row);
    }

    let rows: [Vec<f64>; N_AXES] = rows.try_into().map_err(|rows: Vec<Vec<f64>>| {
        SamplerError::Format(format!(
            "expected {} axis lines, found {}",
            N_AXES,
            rows.len()
        ))
    })?;
    let n_samples = rows[usize::from(Axis::X)].len();
    if rows.iter().any(|row| row.len() != n_samples) {
        return Err(SamplerError::Format(
            "axis lines have different lengths".to_string(),
        ));
    }
    Ok(rows)
}

/// Writes a full `window` to a new `<UUID>.csv` file in `dir` and returns its path.
///
/// Returns DataNotReady if the window is not full yet.
pub fn export_window(window: &SampleWindow, dir: &Path) -> Result<PathBuf, SamplerError> {
    if !window.is_full() {
        return Err(SamplerError::DataNotReady {
            len: window.len(),
            capacity: window.capacity(),
        });
    }
    let path = dir.join(format!("{}.csv", Uuid::new_v4().to_string().to_uppercase()));
    let file = File::create(&path)?;
    write_axes(window, BufWriter::new(file))?;
    info!("Exported {} samples to {}", window.len(), path.display());
    Ok(path)
}

/// Loads a recording as a full window. Timestamps are rebuilt at the nominal sample period.
pub fn load_recording(path: &Path) -> Result<SampleWindow, SamplerError> {
    let file = File::open(path)?;
    let [x, y, z] = read_axes(BufReader::new(file))?;
    if x.is_empty() {
        return Err(SamplerError::Format("recording has no samples".to_string()));
    }

    let period_secs = DEFAULT_SAMPLE_PERIOD_MILLIS as f64 / 1000.0;
    let mut window = SampleWindow::new(x.len());
    for (idx, ((x, y), z)) in x.into_iter().zip(y).zip(z).enumerate() {
        window.push(Sample3D::new(idx as f64 * period_secs, [x, y, z]));
    }
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use test_utils::signals;

    static RECORDED_WINDOW: Lazy<SampleWindow> =
        Lazy::new(|| signals::vibration_window(1000, 10.0, [0.0012, 0.0004, 0.0018]));

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("accel-sampler-{}", Uuid::new_v4()));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_write_layout() {
        let window = signals::window_from_channels(&[0.5, -0.5], &[0.0, 0.25], &[-1.0, -1.0]);
        let mut out = Vec::new();
        write_axes(&window, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.5,-0.5\n0.0,0.25\n-1.0,-1.0"
        );
    }

    #[test]
    fn test_full_window_layout() {
        let mut out = Vec::new();
        write_axes(&RECORDED_WINDOW, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.split(',').count(), RECORDED_WINDOW.len());
        }
    }

    #[test]
    fn test_read_without_trailing_newline() {
        let text = "0.1,0.2,0.3\n0,0,0\n-1,-1,-1";
        let [x, y, z] = read_axes(text.as_bytes()).unwrap();
        assert_eq!(x, vec![0.1, 0.2, 0.3]);
        assert_eq!(y, vec![0.0, 0.0, 0.0]);
        assert_eq!(z, vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_read_bad_number() {
        let text = "0.1,abc\n0,0\n-1,-1\n";
        assert!(matches!(
            read_axes(text.as_bytes()),
            Err(SamplerError::Parse(_))
        ));
    }

    #[test]
    fn test_read_wrong_row_count() {
        let text = "0.1,0.2\n0,0\n";
        assert!(matches!(
            read_axes(text.as_bytes()),
            Err(SamplerError::Format(_))
        ));
    }

    #[test]
    fn test_read_ragged_rows() {
        let text = "0.1,0.2\n0\n-1,-1\n";
        assert!(matches!(
            read_axes(text.as_bytes()),
            Err(SamplerError::Format(_))
        ));
    }

    #[test]
    fn test_export_requires_full_window() {
        let dir = TempDir::new();
        let mut window = SampleWindow::new(10);
        window.push(Sample3D::new(0.0, [0.0, 0.0, -1.0]));
        match export_window(&window, &dir.0) {
            Err(SamplerError::DataNotReady { len, capacity }) => {
                assert_eq!(len, 1);
                assert_eq!(capacity, 10);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_export_and_load() {
        let dir = TempDir::new();
        let window = &*RECORDED_WINDOW;
        let path = export_window(window, &dir.0).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

        let loaded = load_recording(&path).unwrap();
        assert!(loaded.is_full());
        assert_eq!(loaded.channels(), window.channels());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new();
        assert!(matches!(
            load_recording(&dir.0.join("missing.csv")),
            Err(SamplerError::Io(_))
        ));
    }
}
