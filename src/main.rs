// src/main.rs

use nannou::prelude::*;

use coffeeglobe::{
    animation::RotationAnimator,
    config::Config,
    geo::Orthographic,
    models::{merge, BagTable, CoffeeData, Topology},
    views::{globe_scale, palette, GlobeView, Layout, SliderWidget, StatsPanel},
};

struct Model {
    config: Config,

    // Data
    data: CoffeeData,

    // Views
    globe: GlobeView,
    slider_import: SliderWidget,
    slider_export: SliderWidget,
    stats: StatsPanel,
    layout: Layout,

    // Animation
    projection: Orthographic,
    animator: RotationAnimator,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title("coffeeglobe 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .resized(window_resized)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    // Startup join: all four data sources must load before first render
    let topology = Topology::load(config.resolve_data_path(&config.paths.world_file))
        .expect("Failed to load world geometry");
    let exports = BagTable::load(config.resolve_data_path(&config.paths.export_file))
        .expect("Failed to load export data");
    let imports = BagTable::load(config.resolve_data_path(&config.paths.import_file))
        .expect("Failed to load import data");
    let drunk = BagTable::load(config.resolve_data_path(&config.paths.drunk_file))
        .expect("Failed to load consumption data");

    let features = topology.features();
    let data = merge(&features, &exports, &imports, &drunk);
    println!(
        "coffeeglobe: {} countries in rotation ({} boundaries)",
        data.records.len(),
        features.len()
    );
    if data.records.is_empty() {
        eprintln!("coffeeglobe: no countries matched the tables; globe will sit still");
    }

    let layout = Layout::compute(app.window_rect(), &config.layout);
    let projection = Orthographic::new(
        globe_scale(layout.map.w(), config.layout.mobile_breakpoint),
        layout.map.xy(),
    );

    // Slider domains come from each table, not the merged set
    let slider_import = SliderWidget::new(
        layout.slider_import,
        palette::import_scale(),
        imports.max_value,
        config.animation.duration,
        config.animation.easing,
    );
    let slider_export = SliderWidget::new(
        layout.slider_export,
        palette::export_scale(),
        exports.max_value,
        config.animation.duration,
        config.animation.easing,
    );

    let globe = GlobeView::new(&features, &data);
    let animator = RotationAnimator::new(config.animation.duration, config.animation.easing);

    Model {
        config,
        data,
        globe,
        slider_import,
        slider_export,
        stats: StatsPanel::new(),
        layout,
        projection,
        animator,
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    // A new cycle starting is the cue to refresh the widgets
    if let Some(index) = model
        .animator
        .update(&model.data, &mut model.projection, app.time)
    {
        let record = &model.data.records[index];
        model.stats.set(record);
        model.slider_import.update(record.import_bags, app.time);
        model.slider_export.update(record.export_bags, app.time);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let current = model
        .data
        .records
        .get(model.animator.cursor())
        .map(|record| record.name.as_str());
    model.globe.draw(&draw, &model.projection, current);

    model.slider_import.draw(&draw, app.time);
    model.slider_export.draw(&draw, app.time);
    model.stats.draw(&draw, model.layout.stats_origin);

    draw.to_frame(app, &frame).unwrap();
}

fn window_resized(app: &App, model: &mut Model, _dim: Vec2) {
    model.layout = Layout::compute(app.window_rect(), &model.config.layout);

    // Only scale and translate move; the in-flight rotation is untouched
    model.projection.set_scale(globe_scale(
        model.layout.map.w(),
        model.config.layout.mobile_breakpoint,
    ));
    model.projection.set_translate(model.layout.map.xy());

    model.slider_import.resize(model.layout.slider_import);
    model.slider_export.resize(model.layout.slider_export);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        if model.animator.is_stopped() {
            model.animator.resume(app.time);
        } else {
            model.animator.stop(app.time);
        }
    }
}
