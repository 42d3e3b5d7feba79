//! Command-line probe over a provisioned forum store.
//!
//! # Responsibility
//! - Open one store file and run a single finder per invocation.
//! - Print results as pretty JSON so output can be piped into other tools.

use clap::{Parser, Subcommand};
use qaforum_core::{
    default_log_level, init_logging, open_db, DbConfig, QuestionLikeRepository, QuestionRepository,
    ReplyRepository, SqliteQuestionLikeRepository, SqliteQuestionRepository, SqliteReplyRepository,
    SqliteUserRepository, UserRepository,
};
use rusqlite::Connection;
use serde_json::{json, Value};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_RANK_LIMIT: u32 = 5;

#[derive(Debug, Parser)]
#[command(name = "qaforum", version, about = "Query a Q&A forum store")]
struct Cli {
    /// SQLite file holding the forum tables.
    #[arg(long, global = true, default_value = qaforum_core::db::DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Log level used when `--log-dir` is set.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files. Logging stays off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show one user with their authored and followed questions.
    User { id: i64 },
    /// Show one question with its author, like count and followers.
    Question { id: i64 },
    /// List replies to a question.
    Replies { question_id: i64 },
    /// Rank questions by follower count.
    MostFollowed {
        #[arg(long, default_value_t = DEFAULT_RANK_LIMIT)]
        limit: u32,
    },
    /// Rank questions by like count.
    MostLiked {
        #[arg(long, default_value_t = DEFAULT_RANK_LIMIT)]
        limit: u32,
    },
    /// Average likes per question authored by a user.
    Karma { user_id: i64 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("qaforum: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Value, Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = open_db(&DbConfig::new(&cli.db))?;
    execute(&conn, &cli.command)
}

fn execute(conn: &Connection, command: &Command) -> Result<Value, Box<dyn Error>> {
    let output = match *command {
        Command::User { id } => match SqliteUserRepository::new(conn).find_by_id(id)? {
            Some(user) => json!({
                "user": user,
                "authored_questions": user.authored_questions(conn)?,
                "followed_questions": user.followed_questions(conn)?,
                "liked_questions": user.liked_questions(conn)?,
                "average_karma": user.average_karma(conn)?,
            }),
            None => not_found("user", id),
        },
        Command::Question { id } => match SqliteQuestionRepository::new(conn).find_by_id(id)? {
            Some(question) => json!({
                "question": question,
                "author": question.author(conn)?,
                "num_likes": question.num_likes(conn)?,
                "followers": question.followers(conn)?,
            }),
            None => not_found("question", id),
        },
        Command::Replies { question_id } => {
            json!(SqliteReplyRepository::new(conn).find_by_question_id(question_id)?)
        }
        Command::MostFollowed { limit } => {
            json!(SqliteQuestionRepository::new(conn).most_followed(limit)?)
        }
        Command::MostLiked { limit } => {
            json!(SqliteQuestionLikeRepository::new(conn).most_liked_questions(limit)?)
        }
        Command::Karma { user_id } => json!({
            "user_id": user_id,
            "average_karma": SqliteUserRepository::new(conn).average_karma(user_id)?,
        }),
    };

    log::debug!("event=cli_command module=cli status=ok command={command:?}");
    Ok(output)
}

fn not_found(kind: &str, id: i64) -> Value {
    json!({ "error": "not_found", "kind": kind, "id": id })
}
