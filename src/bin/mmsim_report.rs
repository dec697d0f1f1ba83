use mmsim::base::{Config, ParamActive, ParamStretch};
use mmsim::sim::Simulation;
use mmsim::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "mmsim_report",
    about = "Evaluates the stretched tissue cube and prints the results"
)]
struct Options {
    /// Loading mode: uniaxial or biaxial
    #[structopt(long, default_value = "uniaxial")]
    mode: String,

    /// Stretch ratio along x
    #[structopt(long, default_value = "1.5")]
    lambda_x: f64,

    /// Stretch ratio along y (biaxial mode only)
    #[structopt(long, default_value = "1.25")]
    lambda_y: f64,

    /// Fiber angle about the out-of-plane axis (radians)
    #[structopt(long, default_value = "0")]
    fiber_angle: f64,

    /// Active contraction law: none, simple, or hunter
    #[structopt(long, default_value = "none")]
    active: String,

    /// Active tension magnitude (TCa)
    #[structopt(long, default_value = "3")]
    tca: f64,

    /// Length sensitivity (β) of the hunter law
    #[structopt(long, default_value = "1.45")]
    beta: f64,

    /// Prints the response as JSON instead of formatted text
    #[structopt(long)]
    json: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // configuration
    let stretch = match options.mode.as_str() {
        "uniaxial" => ParamStretch::Uniaxial {
            lambda: options.lambda_x,
        },
        "biaxial" => ParamStretch::Biaxial {
            lambda_x: options.lambda_x,
            lambda_y: options.lambda_y,
        },
        _ => return Err("unsupported loading mode"),
    };
    let mut config = Config::new(stretch);
    config.set_fiber_angle(options.fiber_angle)?;
    match options.active.as_str() {
        "none" => (),
        "simple" => {
            config.set_active(ParamActive::Simple { tca: options.tca })?;
        }
        "hunter" => {
            config.set_active(ParamActive::LengthDependent {
                tca: options.tca,
                beta: options.beta,
            })?;
        }
        _ => return Err("unsupported active contraction law"),
    }

    // run the pipeline and print the report
    let response = Simulation::new(&config)?.run()?;
    if options.json {
        println!("{}", response.to_json()?);
    } else {
        println!("{}", config);
        println!("{:.5}", response);
    }
    Ok(())
}
