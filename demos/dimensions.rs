use flagkind::{CommandLineParser, Kind};

fn main() {
    let parser = CommandLineParser::new("dimensions")
        .typed(
            "width",
            Kind::Float,
            "Describes something something something",
            true,
        )
        .switch("test", "Sets the dry run", false)
        .typed("height", Kind::String, "", false)
        .build();

    let parsed = parser.parse();
    println!("{parsed}");
}
