use argbind::{CommandLineParser, Parameter};

fn main() {
    let mut verbose: bool = false;
    let mut scale: i64 = 0;
    let mut items: Vec<i64> = Vec::default();

    CommandLineParser::new("summer")
        .about("Sum up the items.")
        .version("0.1.0")
        .add(Parameter::option(&mut verbose, "verbose", Some('v')).help("Show each item as it is summed."))
        .add(
            Parameter::option(&mut scale, "scale", Some('s'))
                .default("1")
                .help("Multiply the sum by this much."),
        )
        .add(Parameter::variadic(&mut items, "item").help("The items to sum."))
        .build()
        .parse();

    if verbose {
        for item in &items {
            println!("+ {item}");
        }
    }

    let sum: i64 = items.iter().sum();
    println!("Sum: {}", sum * scale);
}
