use std::collections::VecDeque;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::error::VizError;

/// Number of per-item durations kept for the moving-average time estimate.
const TIMING_WINDOW: usize = 100;

/// Rendering options for [`progress_bar_str_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarOptions {
    /// Length of the bar in characters.
    pub bar_length: usize,
    /// Marker character used to fill the bar.
    pub bar_marker: char,
    /// Whether to include the bar itself or only the percentage number.
    pub show_bar: bool,
}

impl Default for ProgressBarOptions {
    fn default() -> Self {
        Self {
            bar_length: 20,
            bar_marker: '=',
            show_bar: true,
        }
    }
}

/// Format a progress percentage as a bar string, e.g. `[=====     ] 50%`.
///
/// Percentages above `1.0` are clamped to `1.0`.
///
/// # Errors
///
/// If `percentage` is negative, an error is returned.
///
/// Example:
///
/// ```
/// use cloudwrap_viz::progress_bar_str;
///
/// assert_eq!(progress_bar_str(1.0).unwrap(), "[====================] 100%");
/// ```
pub fn progress_bar_str(percentage: f64) -> Result<String, VizError> {
    progress_bar_str_with(percentage, &ProgressBarOptions::default())
}

/// Format a progress percentage as a bar string with explicit options.
///
/// # Errors
///
/// If `percentage` is negative or the bar length is zero, an error is
/// returned.
pub fn progress_bar_str_with(
    percentage: f64,
    options: &ProgressBarOptions,
) -> Result<String, VizError> {
    if percentage < 0.0 {
        return Err(VizError::PercentageOutOfRange(percentage));
    }
    let percentage = percentage.min(1.0);
    if options.bar_length == 0 {
        return Err(VizError::InvalidBarLength);
    }
    let percent = (percentage * 100.0) as u32;
    if !options.show_bar {
        return Ok(format!("{percent}%"));
    }
    let fill = (percentage * options.bar_length as f64) as usize;
    let bar = options.bar_marker.to_string().repeat(fill);
    Ok(format!(
        "[{bar:<width$}] {percent}%",
        width = options.bar_length
    ))
}

/// Write `text` over the current line of `sink` and flush.
///
/// The line is rewritten in place with a carriage return, so repeated calls
/// produce a dynamically updating line.
///
/// # Errors
///
/// If writing to the sink fails, an error is returned.
pub fn print_dynamic<W: Write>(sink: &mut W, text: &str) -> Result<(), VizError> {
    write!(sink, "\r{text}")?;
    sink.flush()?;
    Ok(())
}

/// Iterator adapter reporting progress and remaining time to a sink.
///
/// Built by [`print_progress`] or [`print_progress_with_len`]. Yields every
/// element of the wrapped iterator through unchanged and in order; as a
/// side effect it rewrites a progress line of the form
///
/// ```text
/// [=============       ] 70% (7/10) - 00:00:03 remaining
/// ```
///
/// after each completed element, using a moving average of the last 100
/// per-item durations for the time estimate. 100% is
/// reported exactly once, and the line is terminated with a newline when
/// the sequence ends. Sink write failures are swallowed so that progress
/// reporting can never alter the iteration itself.
pub struct PrintProgress<'a, I, W: Write> {
    inner: I,
    sink: &'a mut W,
    total: usize,
    count: usize,
    timings: VecDeque<Duration>,
    last: Instant,
    finished: bool,
}

/// Wrap an iterator of known length with progress reporting on `sink`.
///
/// Example:
///
/// ```
/// use cloudwrap_viz::print_progress;
///
/// let mut sink = Vec::new();
/// let doubled: Vec<i32> = print_progress(0..50, &mut sink).map(|i| 2 * i).collect();
/// assert_eq!(doubled.len(), 50);
/// ```
pub fn print_progress<I, W>(iterable: I, sink: &mut W) -> PrintProgress<'_, I::IntoIter, W>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    W: Write,
{
    let inner = iterable.into_iter();
    let total = inner.len();
    print_progress_with_len(inner, sink, total)
}

/// Wrap an iterator with progress reporting, declaring its length.
///
/// Use this for iterators that do not know their own length, e.g.
/// generator-style adaptors. `n_items` is trusted for the percentage and
/// the remaining-time estimate.
pub fn print_progress_with_len<I, W>(
    iterable: I,
    sink: &mut W,
    n_items: usize,
) -> PrintProgress<'_, I::IntoIter, W>
where
    I: IntoIterator,
    W: Write,
{
    PrintProgress {
        inner: iterable.into_iter(),
        sink,
        total: n_items,
        count: 0,
        timings: VecDeque::with_capacity(TIMING_WINDOW),
        last: Instant::now(),
        finished: false,
    }
}

impl<I, W> PrintProgress<'_, I, W>
where
    I: Iterator,
    W: Write,
{
    fn report(&mut self) {
        let fraction = self.count as f64 / self.total.max(1) as f64;
        let Ok(bar) = progress_bar_str(fraction) else {
            return;
        };
        let avg = self.timings.iter().sum::<Duration>() / self.timings.len() as u32;
        let eta = avg * self.total.saturating_sub(self.count) as u32;
        let secs = eta.as_secs();
        let line = format!(
            "{bar} ({}/{}) - {:02}:{:02}:{:02} remaining",
            self.count,
            self.total,
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        );
        let _ = print_dynamic(self.sink, &line);
    }
}

impl<I, W> Iterator for PrintProgress<'_, I, W>
where
    I: Iterator,
    W: Write,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let now = Instant::now();
        if self.count > 0 {
            self.timings.push_back(now - self.last);
            if self.timings.len() > TIMING_WINDOW {
                self.timings.pop_front();
            }
            self.report();
        }
        self.last = now;
        match self.inner.next() {
            Some(item) => {
                self.count += 1;
                Some(item)
            }
            None => {
                self.finished = true;
                let _ = writeln!(self.sink);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, W> ExactSizeIterator for PrintProgress<'_, I, W>
where
    I: ExactSizeIterator,
    W: Write,
{
}
