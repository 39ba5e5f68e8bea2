use sequential_sample::SessionBuilder;
use tracing_subscriber::EnvFilter;

struct Args {
    population: usize,
    sample: usize,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        population: 700,
        sample: 40,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        let parse_err = |e: std::num::ParseIntError| format!("invalid value for {flag}: {e}");
        match flag.as_str() {
            "--population" => args.population = value.parse().map_err(parse_err)?,
            "--sample" => args.sample = value.parse().map_err(parse_err)?,
            "--seed" => args.seed = Some(value.parse().map_err(parse_err)?),
            _ => return Err(format!("unknown argument {flag}")),
        }
    }
    Ok(args)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: print_sample [--population N] [--sample n] [--seed s]");
            std::process::exit(2);
        }
    };

    let mut data_rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let collection: Vec<i32> = (0..args.population).map(|_| data_rng.i32(..)).collect();

    println!(
        "Size of collection: {}, number of samples: {}",
        collection.len(),
        args.sample
    );

    let mut builder = SessionBuilder::new(args.sample);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed.wrapping_add(1));
    }
    let result = builder.build_exact(&collection).and_then(|session| {
        session.for_each(|s| {
            println!(
                "Selected: {}, current index: {}, index offset: {}",
                s.element, s.index, s.skip
            );
        })
    });

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
