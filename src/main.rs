use clap::{CommandFactory, FromArgMatches};
use log::{info, warn};
use os_str_bytes::OsStrBytesExt;
use took::Timer;

use crate::io::load_instance;
use crate::io::report::{format_outcome, format_summary};
use crate::utils::logging::format_log_method_outcome_timed;
use crate::utils::validator::validate_solution;

mod cli;
mod io;
mod problem;
mod solution;
mod solver;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;
    let args = cli::ProgramArguments::from_arg_matches(
        &cli::ProgramArguments::command()
            .get_matches_from(args.iter().flat_map(|it| {
                it.split(" ").into_iter().collect::<Vec<_>>()
            }))
    )?;
    info!("{:?}", &args);

    let load_timer = Timer::new();
    let graph = load_instance(&args.instance)?;
    info!(
        "instance loaded after {} ({} vertices, {} stops)",
        load_timer.took(),
        graph.num_vertices(),
        graph.num_stops()
    );

    let res = solver::run(&graph, &args.solver)?;
    info!(
        "{}",
        format_log_method_outcome_timed(
            &format!("{:?}", args.solver.variant),
            &res.outcome,
            &res.time
        )
    );

    if let Some(solution) = res.outcome.solution() {
        let check = validate_solution(&graph, solution);
        if !check.is_valid() {
            warn!("solver returned an invalid path: {:?}", check);
        }
    }

    println!("{}", format_outcome(&res.outcome));

    if args.print_summary_to_stdout {
        println!("{}", format_summary(&res));
    }

    if let Some(solution_path) = &args.solution {
        info!("writing solution to {}", solution_path);
        io::solution_writer::write_solution(solution_path.as_str(), &res.outcome)?;
    }

    Ok(())
}
