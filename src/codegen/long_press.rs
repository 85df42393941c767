// src/codegen/long_press.rs
// Long press gesture snippets

use super::{JsNumber, Language, LongPressRequest, Target};
use crate::error::Result;

pub fn generate(req: &LongPressRequest) -> Result<String> {
    let target = Target::resolve(req.use_element, req.element_id.as_deref(), req.x, req.y)?;
    let duration = JsNumber(req.duration);

    let code = match (req.language, target) {
        (Language::Javascript, Target::Element(id)) => format!(
            r#"// For WebdriverIO v9+
const element = $('~{id}');
await element.longPress({{ duration: {duration} }});

// For WebdriverIO below v9
await $('~{id}').touchAction('longPress');"#
        ),
        (Language::Javascript, Target::Coordinates(p)) => {
            let (x, y) = p.js();
            format!(
                r#"// For WebdriverIO v9+
await browser.touchAction({{ x: {x}, y: {y}, duration: {duration} }});

// For WebdriverIO below v9
await driver.touchAction([
  {{ action: 'longPress', x: {x}, y: {y}, ms: {duration} }},
  {{ action: 'release' }}
]);"#
            )
        }
        (Language::Java, Target::Element(id)) => format!(
            r#"// Using W3C Actions API (recommended)
WebElement element = driver.findElement(AppiumBy.accessibilityId("{id}"));
Point source = element.getLocation();
PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence sequence = new Sequence(finger, 1);

// Move to element, press down, wait, then release
sequence.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), source.x, source.y));
sequence.addAction(finger.createPointerDown(PointerInput.MouseButton.LEFT.asArg()));
// Hold for {duration} milliseconds
sequence.addAction(new Pause(finger, Duration.ofMillis({duration})));
sequence.addAction(finger.createPointerUp(PointerInput.MouseButton.LEFT.asArg()));

// Perform the action
driver.perform(Collections.singletonList(sequence));"#
        ),
        (Language::Java, Target::Coordinates(p)) => {
            let (x, y) = p.js();
            format!(
                r#"// Using W3C Actions API (recommended)
PointerInput finger = new PointerInput(PointerInput.Kind.TOUCH, "finger");
Sequence sequence = new Sequence(finger, 1);

sequence.addAction(finger.createPointerMove(Duration.ofMillis(0),
        PointerInput.Origin.viewport(), {x}, {y}));
sequence.addAction(finger.createPointerDown(PointerInput.MouseButton.LEFT.asArg()));
// Hold for {duration} milliseconds
sequence.addAction(new Pause(finger, Duration.ofMillis({duration})));
sequence.addAction(finger.createPointerUp(PointerInput.MouseButton.LEFT.asArg()));

// Perform the action
driver.perform(Collections.singletonList(sequence));"#
            )
        }
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(language: Language, element_id: Option<&str>) -> LongPressRequest {
        LongPressRequest {
            language,
            use_element: element_id.is_some(),
            element_id: element_id.map(String::from),
            x: Some(120.0),
            y: Some(640.0),
            duration: 2000.0,
        }
    }

    #[test]
    fn javascript_element() {
        let code = generate(&press(Language::Javascript, Some("menu"))).unwrap();
        assert!(code.contains("await element.longPress({ duration: 2000 });"));
        assert!(code.contains("await $('~menu').touchAction('longPress');"));
    }

    #[test]
    fn javascript_coordinates() {
        let code = generate(&press(Language::Javascript, None)).unwrap();
        assert!(code.contains("await browser.touchAction({ x: 120, y: 640, duration: 2000 });"));
        assert!(code.contains("{ action: 'longPress', x: 120, y: 640, ms: 2000 }"));
    }

    #[test]
    fn java_hold_duration() {
        let mut req = press(Language::Java, None);
        req.duration = 750.0;
        let code = generate(&req).unwrap();
        assert!(code.contains("// Hold for 750 milliseconds"));
        assert!(code.contains("new Pause(finger, Duration.ofMillis(750))"));
        assert!(code.contains("PointerInput.Origin.viewport(), 120, 640));"));
    }

    #[test]
    fn java_element() {
        let code = generate(&press(Language::Java, Some("menu"))).unwrap();
        assert!(code.contains(r#"accessibilityId("menu")"#));
        assert!(code.contains("source.x, source.y"));
    }

    #[test]
    fn validation_errors() {
        let mut req = press(Language::Java, None);
        req.use_element = true;
        assert_eq!(generate(&req).unwrap_err().missing_field(), Some("elementId"));

        let mut req = press(Language::Java, None);
        req.x = None;
        assert_eq!(generate(&req).unwrap_err().missing_field(), Some("x/y"));
    }
}
