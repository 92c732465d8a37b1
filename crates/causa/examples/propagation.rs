//! Propagates a failure through a few layers and inspects the resulting chain.
//!
//! Run with `cargo run -p causa --example propagation`.

use std::error::Error;
use std::fmt;
use std::io;

use causa::{
    ErrorInfo, FrameFormat, Message, WrapExt, cause, find, get_all_error_info, get_error_info,
    get_original_error_info, get_stack, get_stack_cause,
};

/// Status code attached by the layer that knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Status(u16);

impl ErrorInfo for Status {
    fn when_error(
        &self,
        cause: Option<&(dyn Error + 'static)>,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match cause {
            Some(cause) => write!(f, "{cause}"),
            None => write!(f, "status {}", self.0),
        }
    }
}

fn read_config(path: &str) -> Result<String, io::Error> {
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{path}: no such file"),
    ))
}

fn load(path: &str) -> causa::Result<String> {
    read_config(path)
        .with_error_info(Status(404))
        .with_message_fmt(format_args!("loading {path}"))
}

fn start() -> causa::Result<()> {
    let config = load("app.toml").with_message("startup failed")?;
    println!("loaded {} bytes", config.len());
    Ok(())
}

fn main() {
    let Err(err) = start().with_error_info(Status(503)) else {
        return;
    };

    println!("error: {err}");
    println!("root cause: {}", cause(&err));

    if let Some(io) = find::<io::Error>(&err) {
        println!("io kind: {:?}", io.kind());
    }

    println!("latest status: {:?}", get_error_info::<Status>(&err));
    println!("original status: {:?}", get_original_error_info::<Status>(&err));
    for message in get_all_error_info::<Message>(&err) {
        println!("message: {}", message.as_str());
    }

    if let Some(frame) = get_stack_cause(&err) {
        println!(
            "began in {} at {}",
            frame.display(FrameFormat::FuncName),
            frame.display(FrameFormat::Location)
        );
    }
    if let Some(stack) = get_stack(&err) {
        print!("stack:{stack}");
    }
}
