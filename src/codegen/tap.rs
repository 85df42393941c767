// src/codegen/tap.rs
// Tap gesture snippets

use super::{Language, Point, TapRequest, Target};
use crate::error::Result;

pub fn generate(req: &TapRequest) -> Result<String> {
    let target = Target::resolve(req.use_element, req.element_id.as_deref(), req.x, req.y)?;
    Ok(render(req.language, target))
}

fn render(language: Language, target: Target<'_>) -> String {
    match (language, target) {
        (Language::Javascript, Target::Element(id)) => javascript_element(id),
        (Language::Javascript, Target::Coordinates(p)) => javascript_coordinates(p),
        (Language::Java, Target::Element(id)) => java_element(id),
        (Language::Java, Target::Coordinates(p)) => java_coordinates(p),
    }
}

fn javascript_element(id: &str) -> String {
    format!(
        r#"// For WebdriverIO v9+
const element = $('~{id}');
// It will automatically scroll to the element if it's not already in the viewport
await element.tap();

// For WebdriverIO below v9
await $('~{id}').click();"#
    )
}

fn javascript_coordinates(point: Point) -> String {
    let (x, y) = point.js();
    format!(
        r#"// For WebdriverIO v9+
await browser.tap({{ x: {x}, y: {y} }});

// For WebdriverIO below v9
// Option 1: Using touchAction
await driver.touchAction([
  {{ action: 'tap', x: {x}, y: {y} }}
]);

// Option 2: Using action API
await driver
  .action('pointer')
  .move({x}, {y})
  .down()
  .up()
  .perform();"#
    )
}

fn java_element(id: &str) -> String {
    format!(
        r#"// Using W3C Actions API (recommended)
WebElement element = driver.findElement(AppiumBy.accessibilityId("{id}"));
Point source = element.getLocation();
PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence sequence = new Sequence(finger, 1);

// Press and release (tap)
sequence.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), source.x, source.y));
sequence.addAction(finger.createPointerDown(PointerInput.MouseButton.MIDDLE.asArg()));
sequence.addAction(finger.createPointerUp(PointerInput.MouseButton.MIDDLE.asArg()));

// Perform the action
driver.perform(Collections.singletonList(sequence));

// Alternative: Simple click
// element.click();"#
    )
}

fn java_coordinates(point: Point) -> String {
    let (x, y) = point.js();
    format!(
        r#"// Using W3C Actions API (recommended)
PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence sequence = new Sequence(finger, 1);

// Press and release (tap)
sequence.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), {x}, {y}));
sequence.addAction(finger.createPointerDown(PointerInput.MouseButton.MIDDLE.asArg()));
sequence.addAction(finger.createPointerUp(PointerInput.MouseButton.MIDDLE.asArg()));

// Perform the action
driver.perform(Collections.singletonList(sequence));"#
    )
}
