// src/codegen/double_tap.rs
// Double tap gesture snippets

use super::{DoubleTapRequest, JsNumber, Language, Target};
use crate::error::Result;

pub fn generate(req: &DoubleTapRequest) -> Result<String> {
    let target = Target::resolve(req.use_element, req.element_id.as_deref(), req.x, req.y)?;
    let pause = JsNumber(req.pause_duration);

    let code = match (req.language, target) {
        (Language::Javascript, Target::Element(id)) => format!(
            r#"// For WebdriverIO v9+
const element = $('~{id}');
await element.doubleClick();

// For WebdriverIO below v9
// Using the Gestures helper class
const element = $('~{id}');
const {{ x, y }} = await element.getLocation();
const centerX = x + (await element.getSize()).width / 2;
const centerY = y + (await element.getSize()).height / 2;

await driver
  .action('pointer')
  .move(centerX, centerY)
  .down()
  .up()
  .pause({pause})
  .down()
  .up()
  .perform();"#
        ),
        (Language::Javascript, Target::Coordinates(p)) => {
            let (x, y) = p.js();
            format!(
                r#"// For WebdriverIO v9+
// No direct method for coordinates in v9+, use action API

// For WebdriverIO below v9
// Option 1: Using touchAction
await driver.touchAction([
  {{ action: 'tap', x: {x}, y: {y} }},
  {{ action: 'wait', ms: {pause} }},
  {{ action: 'tap', x: {x}, y: {y} }}
]);

// Option 2: Using action API
await driver
  .action('pointer')
  .move({x}, {y})
  .down()
  .up()
  .pause({pause})
  .down()
  .up()
  .perform();"#
            )
        }
        (Language::Java, target) => {
            let (locate, origin) = match target {
                Target::Element(id) => (
                    format!(
                        "WebElement element = driver.findElement(AppiumBy.accessibilityId(\"{id}\"));\n\
                         Point source = element.getLocation();\n"
                    ),
                    "source.x, source.y".to_string(),
                ),
                Target::Coordinates(p) => {
                    let (x, y) = p.js();
                    (String::new(), format!("{x}, {y}"))
                }
            };
            format!(
                r#"{locate}PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence tap = new Sequence(finger, 1);

// First tap
tap.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), {origin}));
tap.addAction(finger.createPointerDown(PointerInput.MouseButton.LEFT.asArg()));
tap.addAction(finger.createPointerUp(PointerInput.MouseButton.LEFT.asArg()));

// Small pause between taps
tap.addAction(new Pause(finger, Duration.ofMillis({pause})));

// Second tap
tap.addAction(finger.createPointerDown(PointerInput.MouseButton.LEFT.asArg()));
tap.addAction(finger.createPointerUp(PointerInput.MouseButton.LEFT.asArg()));

// Perform the action
driver.perform(Collections.singletonList(tap));"#
            )
        }
    };
    Ok(code)
}
