use std::process::ExitCode;

const SOURCE_SVG: &str = "assets/icons/wiimadhiit-w-red.svg";
const DEST_PNG: &str = "assets/icons/app_icon.png";

fn main() -> ExitCode {
    icon_rasterizer::logger::init();

    if icon_rasterizer::convert(SOURCE_SVG, DEST_PNG) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
