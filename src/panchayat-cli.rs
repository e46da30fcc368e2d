//! A command-line front end for the panchayat election simulator and the
//! dosa counter.

use std::fmt::{Display, Formatter};

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info, LevelFilter};

use panchayat::{
    logging,
    model::{
        common::{Candidate, VoterId},
        count_votes_in_regions, create_vote_validator,
        election::{CandidateResult, VoteReceipt},
        tally_pure, Election, Tally, Validation,
    },
    stall::calculate_dosa_order,
    Error as LibError, Scenario,
};

const PROGRAM_NAME: &str = "panchayat";

const ABOUT_TEXT: &str = "Run a panchayat election scenario, or bill a dosa order.

EXIT CODES:
     0: Success.
   255: Ran successfully, but the dosa order was invalid.
 Other: Error.";

const ELECTION: &str = "election";
const DOSA: &str = "dosa";

const SCENARIO_PATH: &str = "SCENARIO_PATH";
const SCENARIO_PATH_HELP: &str = "The path to a JSON election scenario, listing\n\
`candidates` and optionally `voters`, `votes`, `rules` and `regions`";

const DOSA_TYPE: &str = "DOSA_TYPE";
const QUANTITY: &str = "quantity";
const SPICY: &str = "spicy";
const LOG_CONFIG: &str = "log-config";
const QUIET: &str = "quiet";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .subcommand_required(true)
        .arg(
            Arg::new(LOG_CONFIG)
                .long(LOG_CONFIG)
                .help("Path to the log4rs configuration")
                .action(ArgAction::Set)
                .default_value(logging::LOG_CONFIG_PATH)
                .global(true),
        )
        .arg(
            Arg::new(QUIET)
                .long(QUIET)
                .short('q')
                .help("Silence simulator logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new(ELECTION)
                .about("Run an election scenario and print the results")
                .arg(
                    Arg::new(SCENARIO_PATH)
                        .help(SCENARIO_PATH_HELP)
                        .action(ArgAction::Set)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(DOSA)
                .about("Calculate the bill for a dosa order")
                .arg(
                    Arg::new(DOSA_TYPE)
                        .help("One of plain, masala, onion, butter, paper, cheese")
                        .action(ArgAction::Set)
                        .required(true),
                )
                .arg(
                    Arg::new(QUANTITY)
                        .long(QUANTITY)
                        .short('n')
                        .help("Number of dosas")
                        .action(ArgAction::Set)
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("1"),
                )
                .arg(
                    Arg::new(SPICY)
                        .long(SPICY)
                        .short('s')
                        .help("Add Rs 10 per dosa for extra spice")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Errors that this program may produce.
#[derive(Debug, Eq, PartialEq)]
enum Error {
    /// IO error described by the inner message.
    IO(String),
    /// Failed to decode the scenario.
    Format(String),
    /// The scenario describes an election that cannot be held.
    Setup(String),
}

impl From<LibError> for Error {
    fn from(err: LibError) -> Self {
        match err {
            LibError::Io(e) => Error::IO(e.to_string()),
            LibError::Json(e) => Error::Format(e.to_string()),
            other => Error::Setup(other.to_string()),
        }
    }
}

/// Outcome of one attempted registration.
#[derive(Debug, Eq, PartialEq)]
struct Registration {
    /// `None` if the scenario listed `null`.
    pub voter_id: Option<VoterId>,
    pub registered: bool,
    /// Present only if the scenario has validation rules.
    pub validation: Option<Validation>,
}

impl Display for Registration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let voter = self.voter_id.as_deref().unwrap_or("<missing voter>");
        write!(
            f,
            "{}: {}",
            voter,
            if self.registered {
                "registered"
            } else {
                "refused"
            }
        )?;
        if let Some(Validation {
            reason: Some(reason),
            ..
        }) = &self.validation
        {
            write!(f, " (validator: {reason})")?;
        }
        Ok(())
    }
}

/// Everything that happened while running a scenario.
#[derive(Debug, Eq, PartialEq)]
struct Report {
    pub registrations: Vec<Registration>,
    pub votes: Vec<String>,
    pub results: Vec<CandidateResult>,
    pub winner: Option<Candidate>,
    pub region_total: Option<u64>,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Registrations:")?;
        for registration in self.registrations.iter() {
            writeln!(f, "  {registration}")?;
        }
        writeln!(f, "Votes:")?;
        for vote in self.votes.iter() {
            writeln!(f, "  {vote}")?;
        }
        writeln!(f, "Results:")?;
        for result in self.results.iter() {
            writeln!(f, "  {result}")?;
        }
        match &self.winner {
            Some(winner) => write!(f, "Winner: {} ({})", winner.name, winner.party)?,
            None => write!(f, "Winner: none, no votes were cast")?,
        }
        if let Some(total) = self.region_total {
            write!(f, "\nRegion total: {total}")?;
        }
        Ok(())
    }
}

/// Run an election scenario.
fn simulate(path: &str) -> Result<Report, Error> {
    let scenario = Scenario::from_path(path)?;
    let mut election = Election::new(scenario.candidates)?;
    let validator = scenario.rules.map(create_vote_validator);
    info!(
        "Loaded scenario with {} candidates and {} voters",
        election.candidates().len(),
        scenario.voters.len()
    );

    let registrations = scenario
        .voters
        .into_iter()
        .map(|voter| {
            let validation = validator.as_ref().map(|v| v.validate(voter.as_ref()));
            let voter_id = voter.as_ref().map(|v| v.id.clone());
            let registered = voter.map_or(false, |v| election.register_voter(v));
            Registration {
                voter_id,
                registered,
                validation,
            }
        })
        .collect();

    let mut accepted: Vec<VoteReceipt> = Vec::new();
    let mut votes = Vec::with_capacity(scenario.votes.len());
    for vote in scenario.votes {
        let line = election.cast_vote_with(
            &vote.voter_id,
            &vote.candidate_id,
            |receipt| {
                let line = format!(
                    "{} voted for {}",
                    receipt.voter_id, receipt.candidate_id
                );
                accepted.push(receipt);
                line
            },
            |reason| {
                format!(
                    "{} could not vote for {}: {}",
                    vote.voter_id, vote.candidate_id, reason
                )
            },
        );
        votes.push(line);
    }

    // Independently recount the accepted votes.
    let recount = accepted
        .iter()
        .fold(Tally::new(), |tally, r| tally_pure(&tally, &r.candidate_id));
    let tally = election.tally();
    if recount.iter().any(|(id, count)| tally.get(id) != Some(count)) {
        error!("Recount does not match the election tally");
    }

    Ok(Report {
        registrations,
        votes,
        results: election.results(),
        winner: election.winner().cloned(),
        region_total: scenario
            .regions
            .as_ref()
            .map(|regions| count_votes_in_regions(Some(regions))),
    })
}

/// Run the election subcommand and return the exit code.
fn run_election(args: &ArgMatches) -> u8 {
    let path: &String = args.get_one(SCENARIO_PATH).unwrap(); // Required argument is guaranteed to be present.
    match simulate(path) {
        Ok(report) => {
            println!("{report}");
            0
        }
        Err(Error::IO(msg)) => {
            println!("IO error: {msg}");
            1
        }
        Err(Error::Format(msg)) => {
            println!("Invalid scenario: {msg}");
            1
        }
        Err(Error::Setup(msg)) => {
            println!("Cannot hold election: {msg}");
            1
        }
    }
}

/// Run the dosa subcommand and return the exit code.
fn run_dosa(args: &ArgMatches) -> u8 {
    let dosa_type: &String = args.get_one(DOSA_TYPE).unwrap(); // Required argument is guaranteed to be present.
    let quantity = *args.get_one::<f64>(QUANTITY).unwrap(); // Has a default.
    let is_spicy = args.get_flag(SPICY);

    match calculate_dosa_order(dosa_type, quantity, is_spicy) {
        Some(order) => {
            println!("{order}");
            0
        }
        None => {
            println!("Invalid order: {quantity} x {dosa_type}");
            255
        }
    }
}

/// Dispatch to the chosen subcommand and return the exit code.
fn run(args: &ArgMatches) -> u8 {
    if args.get_flag(QUIET) {
        logging::set_level(logging::LOG_TARGET, LevelFilter::Off);
    }
    match args.subcommand() {
        Some((ELECTION, sub_args)) => run_election(sub_args),
        Some((DOSA, sub_args)) => run_dosa(sub_args),
        _ => unreachable!("a subcommand is required"),
    }
}

fn main() {
    let args = cli().get_matches();

    // Set up logging. Carry on without it if the configuration is unusable.
    let log_config: &String = args.get_one(LOG_CONFIG).unwrap(); // Has a default.
    if let Err(err) = logging::init(log_config) {
        eprintln!("{err}");
    }

    let exit_code = run(&args);
    std::process::exit(exit_code.into())
}
