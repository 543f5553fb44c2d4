//! Interactive convergence plots for the nroot solvers.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- bisect
//! cargo run --example plot --features plot -- newton
//! cargo run --example plot --features plot -- newton 10
//! ```
//!
//! # Modes
//!
//! - **bisect** — Find the first root of `(1 + x²)e^(−x) + sin x` on
//!   \[3.5, 3.6\]. Shows the midpoint and `|f(mid)|` per iteration.
//!
//! - **newton [n]** — Solve the tridiagonal test system of size `n`
//!   (default 4) from the zero vector. Shows `‖F(x)‖` and `‖Δx‖` on a log
//!   scale; the residual drops quadratically near the solution `[1, …, 1]`.

use std::error::Error;

use nalgebra::DVector;

use nroot_observers::{PlotObserver, ShowConfig};
use nroot_solvers::{equation::bisection, system::newton};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "newton".into());
    match mode.as_str() {
        "bisect" => bisect(),
        "newton" => {
            let n = std::env::args()
                .nth(2)
                .as_deref()
                .map(str::parse::<usize>)
                .transpose()
                .unwrap_or_else(|_| {
                    eprintln!("Invalid system size, expected an integer such as 10");
                    std::process::exit(1);
                })
                .unwrap_or(4);
            newton(n)
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [bisect|newton [n]]");
            std::process::exit(1);
        }
    }
}

fn bisect() -> Result<(), Box<dyn Error>> {
    let f = |x: f64| (1.0 + x * x) * (-x).exp() + x.sin();
    let mut obs = PlotObserver::<2>::new(["x", "|f(x)|"]);

    let solution = bisection::solve(&f, [3.5, 3.6], &bisection::Config::default(), &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(format!("Bisection: root ≈ {:.8}", solution.x))
            .x_label("iteration")
            .legend()
            .log_y(),
    )?;

    Ok(())
}

fn newton(n: usize) -> Result<(), Box<dyn Error>> {
    if n < 2 {
        eprintln!("The tridiagonal system needs n ≥ 2");
        std::process::exit(1);
    }

    let f = |x: &DVector<f64>| {
        DVector::from_fn(n, |i, _| {
            let own = (3.0 + 2.0 * x[i]) * x[i];
            match i {
                0 => own - 2.0 * x[1] - 3.0,
                i if i == n - 1 => own - x[n - 2] - 4.0,
                i => own - x[i - 1] - 2.0 * x[i + 1] - 2.0,
            }
        })
    };

    let mut obs = PlotObserver::<2>::new(["‖F(x)‖", "‖Δx‖"]);
    let solution = newton::solve(&f, &DVector::zeros(n), &newton::Config::default(), &mut obs)?;

    // The final residual is not part of any step event.
    #[allow(clippy::cast_precision_loss)]
    let last = solution.iters as f64;
    obs.record(last, [Some(solution.residual_norm), None]);

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Newton: n = {n}, {} iterations, ‖F‖ = {:.2e}",
                solution.iters, solution.residual_norm
            ))
            .x_label("iteration")
            .legend()
            .log_y(),
    )?;

    Ok(())
}
