//! Compiled-in hint table for the generative-animation settings panel.
//!
//! Keys come from three namespaces: element label text ("Seed"), option
//! values ("2D"), and class names ("motion-preview"). Lookup precedence
//! between them is fixed in [`resolve_tooltip`](crate::resolver::resolve_tooltip).

use phf::phf_map;

/// Label text, option value and class name hints.
pub static HINTS: phf::Map<&'static str, &'static str> = phf_map! {
    // Run settings
    "Sampler" => "Sampling method used for every frame of the animation",
    "Steps" => "Number of sampling steps per frame; more steps cost more time",
    "W" => "Output image width, in pixels",
    "H" => "Output image height, in pixels",
    "Seed" => "A value that determines the output of the generator; the same seed with the same settings reproduces the same frame. Use -1 for a random seed on every run",
    "Batch name" => "Output folder name for this run; supports timestring placeholders",
    "Restore faces" => "Run a face-restoration model over each generated frame",
    "Tiling" => "Generate frames that tile seamlessly",

    // Animation settings
    "Animation mode" => "Selects the animation engine; hover each option for details",
    "Max frames" => "Total number of frames to render for the animation",
    "Border" => "How pixels revealed by 2D motion are filled in: replicate stretches edge pixels, wrap copies from the opposite side",

    // Animation-mode option values
    "2D" => "only 2D motion is applied between frames: zoom, angle and X/Y translation operate on the image plane",
    "3D" => "frames are warped in simulated 3D space using a predicted depth map; enables Z translation and 3D rotation",
    "Video Input" => "each frame starts from the matching frame of an input video instead of the previous output",
    "Interpolation" => "generates in-between frames by interpolating prompts and seeds, with no motion applied",

    // Border option values
    "replicate" => "edge pixels are stretched to fill revealed areas",
    "wrap" => "revealed areas are filled from the opposite edge of the image",

    // Motion schedules
    "Zoom" => "Per-frame zoom factor schedule; values above 1.0 zoom in, below 1.0 zoom out",
    "Angle" => "Per-frame rotation schedule in degrees for 2D mode",
    "Transform center X" => "Horizontal center of 2D zoom and rotation, 0.0 to 1.0",
    "Transform center Y" => "Vertical center of 2D zoom and rotation, 0.0 to 1.0",
    "Translation X" => "Per-frame horizontal movement schedule, in pixels",
    "Translation Y" => "Per-frame vertical movement schedule, in pixels",
    "Translation Z" => "Per-frame movement schedule toward or away from the camera; 3D mode only",
    "Rotation 3D X" => "Per-frame camera tilt schedule in degrees; 3D mode only",
    "Rotation 3D Y" => "Per-frame camera pan schedule in degrees; 3D mode only",
    "Rotation 3D Z" => "Per-frame camera roll schedule in degrees; 3D mode only",

    // Coherence
    "Strength schedule" => "How much of the previous frame carries into the next; higher values change less between frames",
    "Noise schedule" => "Amount of noise added to each frame before diffusion",
    "CFG scale schedule" => "Per-frame prompt-adherence schedule",
    "Color coherence" => "Keeps colors consistent across frames by matching each frame's palette to a reference",

    // Output
    "FPS" => "Frames per second of the assembled output video",
    "Add soundtrack" => "Mux an audio file into the output video",
    "Skip video creation" => "Render frames only; do not assemble them into a video",

    // Class-name keys, for unlabeled composite widgets
    "motion-preview" => "Preview of the configured motion applied to a test pattern, without running the generator",
    "guided-images" => "Blend specified images into the animation at scheduled frames",
    "hybrid-video" => "Mixes motion extracted from an input video into the generated animation",
};
