use fp_result::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("Result Example");

    // Constructing results
    let ok: Result<i32> = make_result(7);
    let err: Result<i32> = make_error(invalid_argument("bad input"));
    println!("   success: {}", ok.display());
    println!("   failure: {}", err.display());
    println!("   has_error: {} / {}", has_error(&ok), has_error(&err));

    // Every kind and its canonical name
    println!("\nKinds:");
    for kind in ErrorKind::ALL {
        println!("   {:>2} {}", kind as u8, render(kind));
    }

    // Lifting a panicking computation
    println!("\nPanic lifting:");
    let lifted = try_to_result(|| -> u32 { panic!("boom") });
    println!("   {}", lifted.display());

    match parse_port("http") {
        Ok(port) => println!("   port: {port}"),
        Err(e) => println!("   error: {e}"),
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    let port: u16 = raw.parse()?;
    ensure!(port != 0, out_of_range("port 0 is reserved"));
    Ok(port)
}
