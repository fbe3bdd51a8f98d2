use morton_dilate::DilationPlan;

fn main() {
    use clap::{App, Arg};
    // Use `clap` to parse command-line arguments
    let matches = App::new("mortongen")
        .about("Prints the shift/mask constants of a bit dilation plan")
        .arg(
            Arg::with_name("BITS")
                .help("Number of input bits to dilate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("GAP")
                .help("Number of zero bits inserted between input bits")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .help("Set the output format")
                .takes_value(true)
                .possible_values(&["rust", "c", "table"])
                .default_value("rust"),
        )
        .get_matches();

    let bits: u32 = matches
        .value_of("BITS")
        .and_then(|x| x.parse().ok())
        .expect("Invalid bit count");
    let gap: u32 = matches
        .value_of("GAP")
        .and_then(|x| x.parse().ok())
        .expect("Invalid gap");

    let plan = match DilationPlan::<u128>::generate(bits, gap) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("cannot derive plan: {}", e);
            std::process::exit(1);
        }
    };

    let format = matches.value_of("format").unwrap();

    if format == "rust" {
        println!("// dilate {} bits with a gap of {}", bits, gap);
        println!("x &= {:#x};", plan.initial_mask());
        for step in plan.steps() {
            println!("x = (x | x << {}) & {:#x};", step.shift, step.mask);
        }
    } else if format == "c" {
        println!("/* dilate {} bits with a gap of {} */", bits, gap);
        println!("x &= UINT64_C({:#x});", plan.initial_mask());
        for step in plan.steps() {
            println!(
                "x = (x | x << {}) & UINT64_C({:#x});",
                step.shift, step.mask
            );
        }
    } else if format == "table" {
        println!("{:>5}  {}", "shift", "mask");
        println!("{:>5}  {:#034x}", "-", plan.initial_mask());
        for step in plan.steps() {
            println!("{:>5}  {:#034x}", step.shift, step.mask);
        }
    }
}
