//! Component boilerplate.

/// Define a gallery component: the struct holding its arguments, render
/// target and children, plus the builder surface every component shares.
///
/// Extra state fields start from `Default::default()`.
macro_rules! component {
    (
        $(#[$meta:meta])*
        $name:ident => $type_name:literal as $tag:literal
        $({ $($field:ident : $fty:ty),* $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            args: ::swatch_atelier::Args,
            target: ::swatch_atelier::RenderTarget,
            children: Vec<::swatch_atelier::Child>,
            $($($field: $fty,)*)?
        }

        impl $name {
            /// Declared type name.
            pub const TYPE_NAME: &'static str = $type_name;

            pub fn new() -> Self {
                Self::from_parts(::swatch_atelier::Args::default(), Vec::new())
            }

            fn from_parts(
                args: ::swatch_atelier::Args,
                children: Vec<::swatch_atelier::Child>,
            ) -> Self {
                Self {
                    args,
                    target: ::swatch_atelier::RenderTarget::tag($tag),
                    children,
                    $($($field: Default::default(),)*)?
                }
            }

            /// Render as another tag or component instead of the default.
            pub fn render_as(mut self, target: impl Into<::swatch_atelier::RenderTarget>) -> Self {
                self.target = target.into();
                self
            }

            pub fn child(mut self, child: impl Into<::swatch_atelier::Child>) -> Self {
                self.children.push(child.into());
                self
            }

            pub fn children<I, C>(mut self, children: I) -> Self
            where
                I: IntoIterator<Item = C>,
                C: Into<::swatch_atelier::Child>,
            {
                self.children.extend(children.into_iter().map(Into::into));
                self
            }

            /// Factory for `RenderTarget::Component`.
            pub fn factory(
                args: ::swatch_atelier::Args,
                children: Vec<::swatch_relief::Node>,
            ) -> Box<dyn ::swatch_atelier::Component> {
                Box::new(Self::from_parts(
                    args,
                    children.into_iter().map(::swatch_atelier::Child::from).collect(),
                ))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::swatch_atelier::Styled for $name {
            #[inline]
            fn args_mut(&mut self) -> &mut ::swatch_atelier::Args {
                &mut self.args
            }
        }

        impl From<$name> for ::swatch_atelier::Child {
            fn from(value: $name) -> Self {
                ::swatch_atelier::Child::component(value)
            }
        }
    };
}
