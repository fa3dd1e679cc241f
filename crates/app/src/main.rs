//! Trivia trainer CLI.
//!
//! Runs a diagnostic quiz over stdin, prints the per-topic accuracy
//! report, and offers personalized practice rounds weighted toward the
//! weakest topics.

use clap::Parser;
use log::info;
use std::error::Error;
use std::io::{self, BufRead, Write};

use services::{
    DEFAULT_DIAGNOSTIC_SIZE, DEFAULT_PRACTICE_SIZE, QuestionBank, QuizSession, TrainerService,
};
use trainer_core::model::{TopicName, TopicStats};

#[derive(Parser, Debug)]
#[command(name = "trivia-trainer")]
#[command(about = "Diagnostic trivia quiz with weak-topic practice sessions")]
struct Args {
    /// Path to the question bank JSON file
    #[arg(short, long, default_value = "data/questions.json")]
    questions: String,

    /// Diagnostic quiz length
    #[arg(short, long, default_value_t = DEFAULT_DIAGNOSTIC_SIZE)]
    diagnostic: usize,

    /// Practice session length
    #[arg(short, long, default_value_t = DEFAULT_PRACTICE_SIZE)]
    practice: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let bank = QuestionBank::load(&args.questions)?;
    info!(
        "loaded {} questions across {} topics from {}",
        bank.len(),
        bank.topics().len(),
        args.questions
    );
    if bank.is_empty() {
        eprintln!("Question bank {} is empty, nothing to do.", args.questions);
        return Ok(());
    }

    let mut service = TrainerService::new(bank);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("== Diagnostic quiz ==");
    let mut quiz = service.start_diagnostic(args.diagnostic)?;
    run_quiz(&mut service, &mut quiz, &mut lines)?;
    print_report(&service);

    loop {
        print!("\nStart a practice session? [y/n] ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        if !line?.trim().eq_ignore_ascii_case("y") {
            break;
        }

        println!("\n== Practice session ==");
        let mut practice = service.start_practice(args.practice)?;
        run_quiz(&mut service, &mut practice, &mut lines)?;
        print_report(&service);
    }

    println!("Thanks for practicing!");
    Ok(())
}

/// Steps through a quiz: prompt, read a numbered choice, show feedback.
fn run_quiz(
    service: &mut TrainerService,
    session: &mut QuizSession,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), Box<dyn Error>> {
    while let Some(question) = session.current_question().cloned() {
        let progress = session.progress();

        println!(
            "\n[{}/{}] ({}) {}",
            progress.answered + 1,
            progress.total,
            question.topic(),
            question.prompt()
        );
        for (i, choice) in question.choices().iter().enumerate() {
            println!("  {}) {}", i + 1, choice);
        }

        let choice = read_choice(lines, question.choices())?;
        let feedback = service.submit_answer(session, &choice)?;
        if feedback.is_correct {
            println!("Correct!");
        } else {
            println!("Incorrect. Correct answer: {}", feedback.correct_answer);
        }
        service.advance(session)?;
    }

    println!(
        "\nQuiz complete! Score: {} / {}",
        session.score(),
        session.total_questions()
    );
    Ok(())
}

/// Reads a 1-based choice index from stdin, retrying on bad input.
fn read_choice(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    choices: &[String],
) -> Result<String, Box<dyn Error>> {
    loop {
        print!("Your answer (1-{}): ", choices.len());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Err("stdin closed mid-quiz".into());
        };
        match line?.trim().parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Ok(choices[n - 1].clone()),
            _ => println!("Please enter a number between 1 and {}.", choices.len()),
        }
    }
}

/// Prints the per-topic accuracy report and the current weak topics.
fn print_report(service: &TrainerService) {
    let stats = service.topic_stats();
    let weak = service.weakest_topics(services::quiz::WEAK_TOPIC_COUNT);
    println!("{}", render_report(&stats, &weak));
}

/// Formats the accuracy table, one line per topic plus the overall rate,
/// followed by the weak-topic summary.
fn render_report(stats: &TopicStats, weak: &[TopicName]) -> String {
    if stats.is_empty() {
        return "No attempts recorded yet.".to_owned();
    }

    let mut out = String::from("\n-- Topic accuracy --\n");
    for stat in stats.iter() {
        out.push_str(&format!(
            "  {}: {}/{} ({:.1}%)\n",
            stat.topic(),
            stat.correct(),
            stat.attempted(),
            stat.accuracy() * 100.0
        ));
    }
    out.push_str(&format!(
        "  overall: {:.1}%\n",
        stats.overall_accuracy() * 100.0
    ));

    if weak.is_empty() {
        out.push_str("No weak topics detected, practice will mix all topics.");
    } else {
        let names: Vec<_> = weak.iter().map(ToString::to_string).collect();
        out.push_str(&format!("Weakest topics: {}", names.join(", ")));
    }
    out
}
