use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Fields, ItemStruct, LitStr};

#[derive(Default)]
struct PluginArgs {
    profile: Option<LitStr>,
    version: Option<LitStr>,
}

fn parse_args(args: TokenStream) -> syn::Result<PluginArgs> {
    let mut parsed = PluginArgs::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("profile") {
            parsed.profile = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("version") {
            parsed.version = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported validator_plugin argument, expected `profile` or `version`"))
        }
    });
    syn::parse::Parser::parse2(parser, args)?;
    Ok(parsed)
}

pub fn expand_plugin(args: TokenStream, input: ItemStruct) -> TokenStream {
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let (Some(profile), Some(version)) = (args.profile, args.version) else {
        return syn::Error::new_spanned(
            &input.ident,
            "validator_plugin requires both `profile = \"...\"` and `version = \"...\"`",
        )
        .to_compile_error();
    };

    let wrapper_ident = &input.ident;
    let vis = &input.vis;
    let attrs = &input.attrs;
    let inner_ident = format_ident!("{wrapper_ident}Inner");
    let fields = &input.fields;

    let inner_def = match fields {
        Fields::Named(_) => quote! { #vis struct #inner_ident #fields },
        Fields::Unnamed(_) => quote! { #vis struct #inner_ident #fields; },
        Fields::Unit => quote! { #vis struct #inner_ident; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #inner_def

        #[derive(Debug, Clone)]
        #vis struct #wrapper_ident {
            inner: std::sync::Arc<#inner_ident>,
            cell: std::sync::Arc<::gac_kernel::plugin::PluginCell>,
        }

        impl #wrapper_ident {
            /// Compliance profile implemented by this plugin.
            pub const PROFILE: ::gac_kernel::Profile = ::gac_kernel::Profile::new(#profile, #version);

            pub fn new(inner: #inner_ident) -> Self {
                Self {
                    inner: std::sync::Arc::new(inner),
                    cell: std::sync::Arc::new(::gac_kernel::plugin::PluginCell::new()),
                }
            }
        }

        impl From<#inner_ident> for #wrapper_ident {
            fn from(inner: #inner_ident) -> Self {
                Self::new(inner)
            }
        }

        impl std::ops::Deref for #wrapper_ident {
            type Target = #inner_ident;
            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::gac_kernel::plugin::PluginState for #wrapper_ident {
            fn profile(&self) -> ::gac_kernel::Profile {
                Self::PROFILE
            }

            fn cell(&self) -> &::gac_kernel::plugin::PluginCell {
                &self.cell
            }
        }
    }
}
