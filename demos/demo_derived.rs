use argbind::{derive::*, CommandLineParser, Parameter};

#[derive(Debug, Default, ArgbindParser)]
#[argbind(program = "demo_derived", about = "Show off the derived parser.", version = "0.1.0")]
struct Parameters {
    #[argbind(help = "How many apples.")]
    apple: u64,
    #[argbind(short = 'b')]
    banana: bool,
    #[argbind(option, default = "white", help = "The colour of the daikon root.")]
    daikon_root: String,
    #[argbind(optional)]
    eggplant: f64,
    carrots: Vec<i64>,
}

fn main() {
    let parameters = Parameters::argbind_parse();
    println!("{parameters:?}");
}
