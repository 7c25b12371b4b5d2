//! 场景仿真
//!
//! 加载 scenario.json 并按时间顺序执行其中的事件

use clap::Parser;
use desched_rs::scenario::ScenarioSpec;
use desched_rs::sim::{Action, EventScheduler, SimTime};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Parser)]
#[command(name = "scenario-sim", about = "运行 scenario.json 描述的离散事件场景")]
struct Args {
    /// Path to scenario.json
    #[arg(long)]
    scenario: PathBuf,

    /// 运行到多少微秒；缺省运行到队列为空
    #[arg(long)]
    until_us: Option<u64>,

    /// Disable tracing output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        })
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
    let spec = match ScenarioSpec::from_path(&args.scenario) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let mut scheduler = EventScheduler::default();
    let executed = Rc::new(RefCell::new(0u64));

    let events = spec.build_events(|event_spec| {
        let at_us = event_spec.at_us;
        let label = event_spec.label.clone().unwrap_or_default();
        let executed = Rc::clone(&executed);
        let action: Action = Box::new(move || {
            *executed.borrow_mut() += 1;
            println!("event_fired at_us={at_us} label={label}");
        });
        Some(action)
    });
    for event in events {
        scheduler.schedule(event);
    }

    match args.until_us {
        Some(us) => scheduler.run_until(SimTime::from_micros(us)),
        None => scheduler.run(),
    }

    println!(
        "scenario_done now_us={} executed={} queued_left={}",
        scheduler.now().as_micros(),
        *executed.borrow(),
        scheduler.len()
    );
}
