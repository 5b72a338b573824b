use argbind::{CommandLineParser, Parameter};

fn main() {
    let mut dry_run: bool = false;
    let mut name = String::default();
    let mut quantity: u64 = 0;
    let mut names: Vec<String> = Vec::default();

    let completion = CommandLineParser::new("inventory")
        .about("Manage the inventory.")
        .version("1.0.0")
        .add(Parameter::option(&mut dry_run, "dry-run", Some('n')).help("Do not write anything."))
        .command("add", |sub| {
            sub.about("Add an item to the inventory.")
                .add(Parameter::argument(&mut name, "name"))
                .add(
                    Parameter::option(&mut quantity, "quantity", Some('q'))
                        .default("1")
                        .help("How many to add."),
                )
        })
        .command("remove", |sub| {
            sub.about("Remove items from the inventory.")
                .add(Parameter::variadic(&mut names, "names"))
        })
        .build()
        .parse();

    match completion.commands.get(1).map(String::as_str) {
        Some("add") => println!("Adding {quantity} of '{name}'."),
        Some("remove") => println!("Removing {names:?}."),
        _ => println!("Nothing to do (dry-run: {dry_run})."),
    }
}
