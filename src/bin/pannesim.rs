//! 机器故障延迟仿真
//!
//! 对指令序列在易故障机器上的总完成时间 Ω 做蒙特卡洛估计，
//! 输出均值、总体标准差与直方图。

use clap::Parser;
use pannesim_rs::sim::{CommandSequence, ScenarioSpec, SimError, replicate, replicate_seeded};
use pannesim_rs::stats::Summary;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pannesim",
    about = "机器故障延迟仿真：估计指令序列的总完成时间 Ω 分布"
)]
struct Args {
    /// Scenario JSON file; direct flags below override its fields
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// 预防性维护周期 T
    #[arg(long = "period", short = 'T')]
    maintenance_period: Option<f64>,

    /// 预防性维护时长 θ（修复耗时 θ/2）
    #[arg(long)]
    theta: Option<f64>,

    /// Weibull 形状参数 β
    #[arg(long)]
    beta: Option<f64>,

    /// Weibull 尺度参数 η
    #[arg(long)]
    eta: Option<f64>,

    /// 复制次数 r
    #[arg(long, short = 'r')]
    replications: Option<u32>,

    /// 逗号分隔的指令时长序列，例如 "240,120,80"
    #[arg(long)]
    commands: Option<String>,

    /// 主种子；给定后整批样本可精确重放
    #[arg(long)]
    seed: Option<u64>,

    /// 直方图分箱数
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    bins: u16,

    /// 将 {scenario, samples, summary} 写入 JSON 文件
    #[arg(long)]
    out_json: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    scenario: &'a ScenarioSpec,
    summary: &'a Summary,
    samples: &'a [f64],
}

fn main() {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => {
            let raw = fs::read_to_string(path).expect("read scenario json");
            serde_json::from_str::<ScenarioSpec>(&raw).expect("parse scenario json")
        }
        None => ScenarioSpec::default(),
    };
    apply_overrides(&mut scenario, &args).unwrap_or_else(|e| fail(e));

    let (params, commands, r) = scenario.validate().unwrap_or_else(|e| fail(e));
    let samples = match scenario.seed {
        Some(seed) => replicate_seeded(r, &commands, &params, seed),
        None => replicate(r, &commands, &params),
    }
    .unwrap_or_else(|e| fail(e));

    let summary = Summary::new(&samples, usize::from(args.bins)).expect("non-empty batch");

    println!("replications: {}", summary.replications);
    println!("mean omega:   {:.2}", summary.mean);
    println!("std dev:      {:.2}", summary.std_dev);
    println!();
    print_histogram(&summary);

    if let Some(path) = &args.out_json {
        let report = Report {
            scenario: &scenario,
            summary: &summary,
            samples: &samples,
        };
        let out = serde_json::to_string_pretty(&report).expect("serialize report");
        fs::write(path, out).expect("write report json");
        println!("\nreport written to {}", path.display());
    }
}

fn apply_overrides(scenario: &mut ScenarioSpec, args: &Args) -> Result<(), SimError> {
    if let Some(t) = args.maintenance_period {
        scenario.maintenance_period = t;
    }
    if let Some(theta) = args.theta {
        scenario.maintenance_duration = theta;
    }
    if let Some(beta) = args.beta {
        scenario.shape = beta;
    }
    if let Some(eta) = args.eta {
        scenario.scale = eta;
    }
    if let Some(r) = args.replications {
        scenario.replications = r;
    }
    if let Some(text) = &args.commands {
        scenario.commands = CommandSequence::parse(text)?.into();
    }
    if let Some(seed) = args.seed {
        scenario.seed = Some(seed);
    }
    Ok(())
}

fn print_histogram(summary: &Summary) {
    let hist = &summary.histogram;
    let peak = hist.counts.iter().copied().max().unwrap_or(1).max(1);
    println!("omega distribution ({} bins):", hist.counts.len());
    for (idx, &count) in hist.counts.iter().enumerate() {
        let bar_len = (count as f64 / peak as f64 * 50.0).round() as usize;
        println!(
            "{:>10.1} | {:<50} {}",
            hist.bin_start(idx),
            "#".repeat(bar_len),
            count
        );
    }
}

fn fail(e: SimError) -> ! {
    eprintln!("error: {e}");
    std::process::exit(2);
}
