use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use locomo_core::models::session::AssessmentSession;
use locomo_export::links::ReportLinks;
use locomo_export::report::{ReportContext, report_file_name};
use locomo_export::styles::DocumentStyles;
use locomo_export::{ReportFormat, export};
use locomo_instruments::advice::AdviceCatalog;
use locomo_instruments::all_instruments;
use locomo_instruments::instruments::locomo25::{ANSWER_OPTIONS, QUESTIONS};
use locomo_instruments::level::{AssessmentOutcome, evaluate};
use locomo_transmit::client::ResultTransmitter;
use locomo_transmit::payload::ResultPayload;

use crate::config::LocomoConfig;
use crate::prompt::{Prompter, run_wizard};

/// Formats written after a finished check.
const CHECK_FORMATS: [ReportFormat; 2] = [ReportFormat::Markdown, ReportFormat::Docx];

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub config: LocomoConfig,
    pub catalog: AdviceCatalog,
    pub styles: DocumentStyles,
    pub today: jiff::civil::Date,
}

impl Context {
    pub fn new(config: LocomoConfig) -> eyre::Result<Self> {
        let catalog = config.advice()?;
        Ok(Self {
            config,
            catalog,
            styles: DocumentStyles::default(),
            today: jiff::Zoned::now().date(),
        })
    }

    pub fn report_context(&self, outcome: &AssessmentOutcome) -> ReportContext {
        let advice = self.catalog.advice_for(outcome.level);
        let links = ReportLinks::for_video(&self.config.video_url);
        ReportContext::build(outcome, &advice, &links, self.today)
    }

    fn output_dir(&self, out: Option<PathBuf>) -> PathBuf {
        out.unwrap_or_else(|| self.config.output_dir())
    }
}

/// Run the interactive check, print the result and write the report files.
pub fn check<R: BufRead, W: Write>(
    ctx: &Context,
    input: R,
    output: W,
    send: bool,
    out: Option<PathBuf>,
) -> eyre::Result<Vec<PathBuf>> {
    let mut prompter = Prompter::new(input, output);
    let Some(session) = run_wizard(&mut prompter)? else {
        let mut output = prompter.into_output();
        writeln!(output, "\nCheck cancelled. Nothing was saved.")?;
        return Ok(Vec::new());
    };
    let mut output = prompter.into_output();

    let outcome = evaluate(&session)?;
    let report = ctx.report_context(&outcome);
    print_summary(&mut output, &report)?;

    let dir = ctx.output_dir(out);
    let mut written = vec![save_session(&dir, &session, &report, ctx.today)?];
    for format in CHECK_FORMATS {
        written.push(write_report(&dir, &report, format, &ctx.styles, ctx.today)?);
    }
    for path in &written {
        writeln!(output, "Saved {}", path.display())?;
    }

    if send {
        deliver(ctx, &outcome, &mut output)?;
    }
    Ok(written)
}

/// Re-render a report from a saved session file.
pub fn report(
    ctx: &Context,
    session_path: &Path,
    format: ReportFormat,
    out: Option<PathBuf>,
) -> eyre::Result<PathBuf> {
    let outcome = load_outcome(session_path)?;
    let report = ctx.report_context(&outcome);
    write_report(&ctx.output_dir(out), &report, format, &ctx.styles, ctx.today)
}

/// Send a saved session to the configured endpoint.
pub fn send<W: Write>(ctx: &Context, session_path: &Path, output: &mut W) -> eyre::Result<()> {
    let outcome = load_outcome(session_path)?;
    deliver(ctx, &outcome, output)
}

/// List the instruments with their ranges and cutoffs, then the questionnaire.
pub fn instruments<W: Write>(output: &mut W) -> eyre::Result<()> {
    for instrument in all_instruments() {
        let range = instrument.range();
        let cutoffs = instrument.cutoffs();
        writeln!(output, "{} ({})", instrument.name(), instrument.id())?;
        writeln!(output, "  {}", instrument.description())?;
        writeln!(
            output,
            "  range {}..={}, {:?}, level 1 / 2 / 3 at {} / {} / {}",
            range.min,
            range.max,
            instrument.direction(),
            cutoffs.level1,
            cutoffs.level2,
            cutoffs.level3,
        )?;
    }

    writeln!(output, "\nLocomo25 questions")?;
    for (i, question) in QUESTIONS.iter().enumerate() {
        writeln!(output, "  {:>2}. {question}", i + 1)?;
    }
    let scale: Vec<String> = ANSWER_OPTIONS
        .iter()
        .map(|o| format!("{} = {}", o.value, o.label))
        .collect();
    writeln!(output, "  Answers: {}", scale.join(", "))?;
    Ok(())
}

fn print_summary<W: Write>(output: &mut W, report: &ReportContext) -> eyre::Result<()> {
    writeln!(output, "\n{}", "=".repeat(40))?;
    writeln!(output, "Result: {}", report.level_label)?;
    writeln!(output, "{}", report.summary)?;
    for row in &report.results {
        writeln!(output, "  {:<14} {:<40} {}", row.test, row.value, row.rating)?;
    }
    writeln!(output, "{}", "=".repeat(40))?;
    Ok(())
}

fn load_outcome(path: &Path) -> eyre::Result<AssessmentOutcome> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read session at {}: {e}", path.display()))?;
    let session = AssessmentSession::from_json(&json)?;
    Ok(evaluate(&session)?)
}

fn save_session(
    dir: &Path,
    session: &AssessmentSession,
    report: &ReportContext,
    date: jiff::civil::Date,
) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(&report.name, date, "session.json"));
    std::fs::write(&path, session.to_json()?)?;
    tracing::info!(session_id = %session.id(), path = %path.display(), "session saved");
    Ok(path)
}

fn write_report(
    dir: &Path,
    report: &ReportContext,
    format: ReportFormat,
    styles: &DocumentStyles,
    date: jiff::civil::Date,
) -> eyre::Result<PathBuf> {
    let bytes = export(report, format, styles)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(&report.name, date, format.extension()));
    std::fs::write(&path, bytes)?;
    tracing::info!(%format, path = %path.display(), "report written");
    Ok(path)
}

fn deliver<W: Write>(
    ctx: &Context,
    outcome: &AssessmentOutcome,
    output: &mut W,
) -> eyre::Result<()> {
    let endpoint = ctx.config.endpoint();
    let transmitter = ResultTransmitter::from_config(endpoint.as_deref())?;
    let payload = ResultPayload::from_outcome(outcome, jiff::Timestamp::now());

    match transmitter.send(&payload) {
        Ok(()) => {
            writeln!(output, "Result sent to {}", transmitter.endpoint())?;
            Ok(())
        }
        Err(e) if e.is_retryable() => Err(eyre::eyre!(
            "could not send the result ({e}). Your report is saved; \
             run `locomo send` with the session file to try again"
        )),
        Err(e) => Err(e.into()),
    }
}
