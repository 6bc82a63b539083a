//! Maximize the number of products that can be made from limited resources.
use lpquad::demo::production::{production_model, ProductionReport};
use lpquad::error::Error;
use lpquad::logging::init_tracing;

fn main() -> Result<(), Error> {
    init_tracing();

    let model = production_model()?;
    let result = model.solve();
    print!("{}", ProductionReport::new(&result));

    Ok(())
}
