use crate::commands::manuals;
use crate::error::{Error, Hint};
use crate::util::strcmp;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Help {
    list: bool,
    topic: Option<Topic>,
}

impl Subcommand<()> for Help {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(HELP))?;
        Ok(Help {
            list: cli.check(Arg::flag("list"))?,
            topic: cli.get(Arg::positional("topic"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Topic {
    Read,
    Show,
    Gen,
    Run,
    Config,
    Timeline,
}

const TOPICS: [&str; 6] = ["read", "show", "gen", "run", "config", "timeline"];

impl Topic {
    fn list_all() -> String {
        TOPICS.into_iter().fold(String::new(), |mut acc, x| {
            acc.push_str(&format!("{}\n", x));
            acc
        })
    }

    /// Transforms the variant to its corresponding manual page.
    fn as_manual(&self) -> &str {
        use Topic::*;
        match &self {
            Read => manuals::read::MANUAL,
            Show => manuals::show::MANUAL,
            Gen => manuals::gen::MANUAL,
            Run => manuals::run::MANUAL,
            Config => manuals::config::MANUAL,
            Timeline => manuals::timeline::MANUAL,
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let topic = TOPICS
            .iter()
            .find(|t| strcmp::cmp_ignore_case(t, s) == true)
            .ok_or_else(|| Error::UnknownTopic(s.to_string(), Hint::TopicsList))?;
        Ok(match *topic {
            "read" => Self::Read,
            "show" => Self::Show,
            "gen" => Self::Gen,
            "run" => Self::Run,
            "config" => Self::Config,
            _ => Self::Timeline,
        })
    }
}

impl Help {
    fn run(&self) {
        if self.list == true {
            println!("{}", Topic::list_all());
        } else {
            let contents = match &self.topic {
                Some(t) => t.as_manual(),
                None => manuals::wavebench::MANUAL,
            };
            println!("{}", contents);
        }
    }
}

const HELP: &str = "\
Read in-depth documentation on wavebench topics.

Usage:
    wavebench help [<topic>]

Args:
    <topic>         a listed topic or any wavebench subcommand

Options:
    --list          print the available topics

Use 'wavebench help --list' to see all available topics.
";
