//! Worked root-finding problems, printed to the terminal.
//!
//! # Usage
//!
//! ```text
//! cargo run --example pages
//! cargo run --example pages -- 10
//! ```
//!
//! The optional argument sets the size of the tridiagonal Newton system
//! (default 4).

use std::error::Error;

use nalgebra::DVector;

use nroot_solvers::{
    equation::{bisection, roots, scan},
    system::newton,
};

fn main() -> Result<(), Box<dyn Error>> {
    let n = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => 4,
    };

    damped_oscillation()?;
    cubic()?;
    dottie()?;
    tridiagonal(n)?;

    Ok(())
}

/// `(1 + x²)e^(−x) + sin x` on `[0, 10]`: trace of the first root, then every root.
fn damped_oscillation() -> Result<(), Box<dyn Error>> {
    let f = |x: f64| (1.0 + x * x) * (-x).exp() + x.sin();
    let domain = scan::Config::new(0.0, 10.0, 0.1)?;

    println!("(1 + x²)e^(−x) + sin x = 0 on [0, 10]");

    let Some(first) = scan::scan(&f, &domain).iter().next().transpose()? else {
        println!("  no sign change found");
        return Ok(());
    };

    let solution = bisection::solve_unobserved(&f, first.as_array(), &bisection::Config::default())?;
    println!("  {:>4} {:>14} {:>14} {:>14} {:>12}", "k", "a", "b", "c", "f(c)");
    for record in &solution.trace {
        println!(
            "  {:>4} {:>14.10} {:>14.10} {:>14.10} {:>12.3e}",
            record.iter, record.left, record.right, record.mid, record.value
        );
    }

    let found = roots::find_roots(&f, &domain, &roots::Config::default())?;
    println!("  {} brackets, {} roots:", found.brackets.len(), found.roots.len());
    for root in &found.roots {
        println!(
            "    x = {:.10}  f(x) = {:.3e}  ({} iterations, {:?})",
            root.x, root.residual, root.iters, root.status
        );
    }
    println!();

    Ok(())
}

/// `x³ − 2x − 5` on `[−5, 5]`.
fn cubic() -> Result<(), Box<dyn Error>> {
    let f = |x: f64| x * x * x - 2.0 * x - 5.0;
    let domain = scan::Config::new(-5.0, 5.0, 1.0)?;

    let found = roots::find_roots(&f, &domain, &roots::Config::default())?;
    println!("x³ − 2x − 5 = 0 on [−5, 5]");
    for root in &found.roots {
        println!("  x = {:.10}  f(x) = {:.3e}", root.x, root.residual);
    }
    println!();

    Ok(())
}

/// The Dottie number, `cos x = x`.
fn dottie() -> Result<(), Box<dyn Error>> {
    let f = |x: f64| x.cos() - x;

    let solution = bisection::solve_unobserved(&f, [0.0, 1.0], &bisection::Config::default())?;
    println!("cos x = x");
    println!("  x = {:.10} after {} iterations", solution.x, solution.iters);
    println!();

    Ok(())
}

/// The tridiagonal system whose exact solution is `[1, …, 1]`.
fn tridiagonal(n: usize) -> Result<(), Box<dyn Error>> {
    if n < 2 {
        return Err(format!("system size must be at least 2, got {n}").into());
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

    let solution = newton::solve_unobserved(&f, &DVector::zeros(n), &newton::Config::default())?;
    let error = (&solution.x - DVector::from_element(n, 1.0)).amax();

    println!("Tridiagonal system, n = {n}");
    println!(
        "  converged in {} iterations ({:?}), max |x − 1| = {error:.3e}",
        solution.iters, solution.convergence
    );
    for (k, norm) in solution.history.iter().enumerate() {
        println!("    {k:>3}  ‖F(x)‖ = {norm:.3e}");
    }

    Ok(())
}
