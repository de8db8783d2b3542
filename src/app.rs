// src/app.rs
use std::io::Write;
use std::process::ExitCode;

use chars_counter_core::{CharsCounterError, CountRequest, MatchCount};
use chars_counter_shared_kernel::ErrorContext;
use tracing::debug;

use crate::args::Args;
use crate::presentation::{self, CountReport};

/// Exit status for a failed run: 2 for a missing argument, 3 for an
/// out-of-range one, 1 for anything else.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CharsCounterError>() {
        Some(e) if e.is_invalid_argument() => 2,
        Some(e) if e.is_out_of_range() => 3,
        _ => 1,
    }
}

pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

/// Builds the request for the parsed arguments; `chars` is the decoded `--chars`.
pub fn build_request<'a>(args: &'a Args, chars: Option<&'a [char]>) -> CountRequest<'a> {
    let mut request = CountRequest { text: args.input.text.as_deref(), chars, ..CountRequest::new() };
    if let (Some(start), Some(end)) = (args.range.start, args.range.end) {
        request = match args.range.limit {
            Some(limit) => request.limited(start, end, limit),
            None => request.range(start, end),
        };
    }
    request
}

/// Run one count and write the report to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<MatchCount> {
    let chars = args.char_set();
    let request = build_request(args, chars.as_deref());
    debug!(mode = ?request.mode, "request built from arguments");

    let count = request
        .execute()
        .with_context(|| format!("{} count failed", request.mode.name()))?;

    let report = CountReport { count, mode: request.mode };
    presentation::emit(&report, args.output.format, out)?;
    Ok(count)
}
