//! Line-oriented wizard driving a [`Wizard`] from any reader and writer.
//!
//! Every prompt re-asks on invalid input. Typing `restart` at any prompt
//! discards the session and starts over; end of input cancels the check.

use std::io::{self, BufRead, Write};

use locomo_core::error::CoreError;
use locomo_core::models::locomo25::{Locomo25Answers, MAX_ANSWER, QUESTION_COUNT};
use locomo_core::models::profile::{Gender, UserProfile};
use locomo_core::models::session::AssessmentSession;
use locomo_core::models::stand_up::StandUpScore;
use locomo_core::models::two_step::TwoStepResult;
use locomo_core::wizard::Wizard;
use locomo_instruments::Instrument;
use locomo_instruments::assets::{self, image_url};
use locomo_instruments::instruments::locomo25::{ANSWER_OPTIONS, QUESTIONS};
use locomo_instruments::instruments::stand_up::{OPTIONS, StandUpTest};
use locomo_instruments::instruments::two_step::TwoStepTest;

const RESTART_WORD: &str = "restart";

/// Why a prompt stopped without a value.
#[derive(Debug)]
enum Flow {
    Restart,
    Cancelled,
    /// The wizard refused a value the prompt had already accepted.
    Rejected(CoreError),
    Io(io::Error),
}

impl From<CoreError> for Flow {
    fn from(e: CoreError) -> Self {
        Flow::Rejected(e)
    }
}

impl From<io::Error> for Flow {
    fn from(e: io::Error) -> Self {
        Flow::Io(e)
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) -> Result<(), Flow> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, Flow> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Flow::Cancelled);
        }
        let line = line.trim().to_string();
        if line.eq_ignore_ascii_case(RESTART_WORD) {
            return Err(Flow::Restart);
        }
        Ok(line)
    }

    /// Ask until `parse` accepts the answer.
    fn ask<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> Result<T, Flow> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(&format!("  {message}"))?,
            }
        }
    }

    fn ask_number<T: std::str::FromStr>(&mut self, prompt: &str) -> Result<T, Flow> {
        self.ask(prompt, |s| {
            s.parse::<T>().map_err(|_| format!("'{s}' is not a number"))
        })
    }
}

/// Run the whole check. Returns `None` if input ended before the last step.
pub fn run_wizard<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> eyre::Result<Option<AssessmentSession>> {
    let mut wizard = Wizard::new();
    loop {
        match drive(prompter, &mut wizard) {
            Ok(()) => {
                tracing::info!(session_id = %wizard.session().id(), "check completed");
                return Ok(Some(wizard.into_session()));
            }
            Err(Flow::Restart) => {
                tracing::info!("check restarted");
                wizard.restart();
                prompter.say("\nStarting over.").map_err(flow_error)?;
            }
            Err(Flow::Cancelled) => {
                tracing::info!(step = ?wizard.step(), "check cancelled");
                return Ok(None);
            }
            Err(Flow::Rejected(e)) => return Err(e.into()),
            Err(Flow::Io(e)) => return Err(e.into()),
        }
    }
}

fn flow_error(flow: Flow) -> eyre::Report {
    match flow {
        Flow::Io(e) => e.into(),
        Flow::Rejected(e) => e.into(),
        other => eyre::eyre!("unexpected prompt state: {other:?}"),
    }
}

fn drive<R: BufRead, W: Write>(p: &mut Prompter<R, W>, wizard: &mut Wizard) -> Result<(), Flow> {
    p.say("Locomo check")?;
    p.say("Three short tests show whether your mobility is starting to decline.")?;
    p.say("Type 'restart' at any prompt to start over.\n")?;
    wizard.begin()?;

    profile_step(p, wizard)?;
    stand_up_step(p, wizard)?;
    two_step_step(p, wizard)?;
    locomo25_step(p, wizard)?;
    Ok(())
}

fn heading<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    wizard: &Wizard,
    title: &str,
) -> Result<(), Flow> {
    p.say(&format!("\n[{:>3}%] {title}", wizard.progress_percent()))
}

fn profile_step<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    wizard: &mut Wizard,
) -> Result<(), Flow> {
    heading(p, wizard, "About you")?;
    loop {
        let name = p.read_line("Name")?;
        let age: u32 = p.ask_number("Age")?;
        let gender = p.ask("Gender (male/female)", parse_gender)?;
        let height: f64 = p.ask_number("Height (cm)")?;

        match UserProfile::new(name, age, gender, height) {
            Ok(profile) => return Ok(wizard.submit_profile(profile)?),
            Err(e) => p.say(&format!("  {e}. Please enter your details again."))?,
        }
    }
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_ascii_lowercase().as_str() {
        "m" | "male" => Ok(Gender::Male),
        "f" | "female" => Ok(Gender::Female),
        _ => Err("answer 'male' or 'female'".to_string()),
    }
}

fn stand_up_step<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    wizard: &mut Wizard,
) -> Result<(), Flow> {
    heading(p, wizard, "Stand-up test")?;
    p.say("Sit on a platform, arms crossed, and try to stand without leaning back.")?;
    p.say(&format!("  Illustration: {}", image_url(assets::STAND_UP)))?;
    p.say("Choose the hardest condition you managed:")?;
    for option in &OPTIONS {
        p.say(&format!(
            "  {}) {} ({})",
            option.score, option.label, option.description
        ))?;
    }

    let score = p.ask("Score (0-8)", |s| {
        let value: u8 = s.parse().map_err(|_| format!("'{s}' is not a score"))?;
        StandUpTest
            .validate(f64::from(value))
            .map_err(|e| e.to_string())?;
        StandUpScore::new(value).map_err(|e| e.to_string())
    })?;
    Ok(wizard.submit_stand_up(score)?)
}

fn two_step_step<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    wizard: &mut Wizard,
) -> Result<(), Flow> {
    heading(p, wizard, "Two-step test")?;
    p.say("Take two strides as long as you can, twice. Measure each in centimetres.")?;
    p.say(&format!("  Illustration: {}", image_url(assets::TWO_STEP)))?;
    let height_cm = wizard
        .session()
        .profile()
        .map(UserProfile::height_cm)
        .ok_or(CoreError::MissingField("profile"))?;

    loop {
        let step1: f64 = p.ask_number("First attempt (cm)")?;
        let step2: f64 = p.ask_number("Second attempt (cm)")?;

        // Checked before anything is recorded, so a bad pair is simply re-asked.
        let measured = match TwoStepResult::measure(step1, step2, height_cm) {
            Ok(measured) => measured,
            Err(e @ CoreError::InvalidMeasurement { .. }) => {
                p.say(&format!("  {e}"))?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = TwoStepTest.validate(measured.score()) {
            p.say(&format!("  {e}. Please measure again."))?;
            continue;
        }

        wizard.submit_two_step(step1, step2)?;
        p.say(&format!("  Two-step score: {:.2}", measured.score()))?;
        return Ok(());
    }
}

fn locomo25_step<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    wizard: &mut Wizard,
) -> Result<(), Flow> {
    heading(p, wizard, "Locomo25 questionnaire")?;
    p.say("How much difficulty did you have during the last month?")?;
    for option in &ANSWER_OPTIONS {
        p.say(&format!("  {}) {}", option.value, option.label))?;
    }

    let mut answers = Locomo25Answers::new();
    for (index, question) in QUESTIONS.iter().enumerate() {
        let value = p.ask(
            &format!("{:>2}/{QUESTION_COUNT} {question}", index + 1),
            |s| match s.parse::<u8>() {
                Ok(v) if v <= MAX_ANSWER => Ok(v),
                _ => Err(format!("answer a number from 0 to {MAX_ANSWER}")),
            },
        )?;
        answers.answer(index, value)?;
    }

    let result = answers.finish()?;
    p.say(&format!("  Locomo25 total: {}", result.total_score()))?;
    Ok(wizard.submit_locomo25(result)?)
}
